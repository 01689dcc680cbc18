//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`clock`] - [`ManualClock`](clock::ManualClock), a pinned, advanceable clock.
//! - [`domain`] - Builders for train records relative to a clock.
//! - [`config`] - Canonical test configurations.

pub mod clock;
pub mod config;
pub mod domain;
