//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Drives the application (the command line)
//! - [`outbound`] - Driven by the application (clock, snapshot storage)

pub mod inbound;
pub mod outbound;
