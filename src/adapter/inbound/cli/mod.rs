//! Command-line adapter.
//!
//! Parses arguments, sets up output and logging, then hands each
//! subcommand to its handler.

pub mod admin;
pub mod board;
pub mod command;
pub mod config;
pub mod corridors;
pub mod data;
pub mod diagnostic;
pub mod dispatch;
pub mod output;
pub mod paths;
pub mod session;
pub mod train;
