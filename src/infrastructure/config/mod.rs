//! Infrastructure configuration modules.

pub mod board;
pub mod logging;
pub mod settings;
pub mod storage;
