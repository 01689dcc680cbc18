//! Snapshot storage configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default slot key; the slot file is `<data_dir>/<key>.json`.
pub const DEFAULT_STORAGE_KEY: &str = "captrain_trains";

/// Where, and whether, the train collection is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// When false the board lives purely in memory for the session.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Directory holding the slot file. Defaults to the captrain home dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Slot key.
    #[serde(default = "default_key")]
    pub key: String,
}

const fn default_enabled() -> bool {
    true
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl StorageConfig {
    /// The data directory, with a leading `~` expanded, or `fallback`.
    #[must_use]
    pub fn resolve_dir(&self, fallback: &Path) -> PathBuf {
        match &self.data_dir {
            Some(dir) => expand_home(dir),
            None => fallback.to_path_buf(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            data_dir: None,
            key: default_key(),
        }
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}
