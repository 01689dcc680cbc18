//! Inbound (driving) ports consumed by inbound adapters.
//!
//! The public view only ever sees [`board::PublicCapacity`]; the admin view
//! drives the full [`board::TrainAdmin`] surface.

pub mod board;
