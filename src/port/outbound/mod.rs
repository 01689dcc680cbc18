//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the store's infrastructure dependencies: the
//! persistent snapshot slot and the wall clock.

pub mod clock;
pub mod snapshot;
