//! Outbound adapters (driven side).
//!
//! - [`file`] - durable JSON slot on disk
//! - [`memory`] - in-memory slot for tests and embedding
//! - [`disabled`] - persistence switched off
//! - [`codec`] - the JSON blob format shared by the slots
//! - [`clock`] - system clock

pub mod clock;
pub mod codec;
pub mod disabled;
pub mod file;
pub mod memory;
