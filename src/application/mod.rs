//! Application services (use cases).
//!
//! - [`store`] - the train record store
//! - [`view`] - read models for the public and admin views

pub mod store;
pub mod view;
