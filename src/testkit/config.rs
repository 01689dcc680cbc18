//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.

use std::path::Path;

use crate::infrastructure::config::settings::Config;

/// Defaults, with the snapshot slot inside `dir`.
pub fn in_dir(dir: &Path) -> Config {
    let mut config = Config::default();
    config.storage.data_dir = Some(dir.to_path_buf());
    config
}

/// Defaults, with persistence switched off.
pub fn in_memory() -> Config {
    let mut config = Config::default();
    config.storage.enabled = false;
    config
}
