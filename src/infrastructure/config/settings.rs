//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Every section is optional; a missing file at the default location means
//! "all defaults". `CAPTRAIN_DATA_DIR` overrides `storage.data_dir`.
//!
//! # Example
//!
//! ```no_run
//! use captrain::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::board::BoardConfig;
use super::logging::LoggingConfig;
use super::storage::StorageConfig;
use crate::domain::corridor::Corridor;
use crate::domain::window::MAX_MIN_LEAD_HOURS;
use crate::error::{ConfigError, Result};

/// Environment variable overriding the snapshot directory.
pub const DATA_DIR_ENV: &str = "CAPTRAIN_DATA_DIR";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Snapshot persistence.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Public board and booking window settings.
    #[serde(default)]
    pub board: BoardConfig,

    /// Corridor catalog. Defaults to the four built-in corridors.
    #[serde(default = "Corridor::builtin")]
    pub corridors: Vec<Corridor>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            storage: StorageConfig::default(),
            board: BoardConfig::default(),
            corridors: Corridor::builtin(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise use defaults.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                self.storage.data_dir = Some(PathBuf::from(dir));
            }
        }
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.storage.key.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "key" }.into());
        }
        if self.storage.key.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "key",
                reason: "must not contain path separators".to_string(),
            }
            .into());
        }
        if self.board.public_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "public_limit",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.board.refresh_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "refresh_interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.board.min_lead_hours == 0 {
            return Err(ConfigError::InvalidValue {
                field: "min_lead_hours",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.board.min_lead_hours > MAX_MIN_LEAD_HOURS {
            return Err(ConfigError::InvalidValue {
                field: "min_lead_hours",
                reason: format!("must be at most {MAX_MIN_LEAD_HOURS}"),
            }
            .into());
        }

        if self.corridors.is_empty() {
            return Err(ConfigError::MissingField { field: "corridors" }.into());
        }
        let mut seen = HashSet::new();
        for corridor in &self.corridors {
            if corridor.id.as_str().trim().is_empty() {
                return Err(ConfigError::MissingField { field: "corridors.id" }.into());
            }
            if !seen.insert(&corridor.id) {
                return Err(ConfigError::InvalidValue {
                    field: "corridors",
                    reason: format!("duplicate corridor id {}", corridor.id),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
