//! Storage-agnostic domain types for the capacity board.
//!
//! - [`train`] - train records, capacity status, partial updates
//! - [`corridor`] - corridor reference data
//! - [`window`] - the booking window rule shared by validation and expiry
//! - [`seed`] - built-in seed records
//! - [`payload`] - screening of imported and persisted collections
//! - [`error`] - validation errors

pub mod corridor;
pub mod error;
pub mod id;
pub mod payload;
pub mod seed;
pub mod train;
pub mod window;
