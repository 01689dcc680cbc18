//! Per-invocation setup shared by every command.
//!
//! Resolves the config file, installs logging and opens the store.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adapter::inbound::cli::diagnostic::{self, ConfigDiagnostic};
use crate::adapter::inbound::cli::{output, paths};
use crate::application::store::TrainStore;
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Resolved configuration for one CLI run.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    /// File the configuration came from, or would be written to.
    pub config_path: PathBuf,
}

impl Session {
    /// Load configuration and install logging.
    ///
    /// An explicit `--config` path must exist. Without one, a missing
    /// `~/.captrain/config.toml` means defaults.
    pub fn start(explicit: Option<&Path>) -> Result<Self> {
        let config_path = explicit.map_or_else(paths::default_config, Path::to_path_buf);
        let mut config = match explicit {
            Some(path) => load_with_diagnostics(path, Config::load(path))?,
            None => load_with_diagnostics(&config_path, Config::load_or_default(&config_path))?,
        };

        if let Some(level) = verbosity_level(output::verbosity()) {
            config.logging.level = level.to_string();
        }
        config.init_logging();
        debug!(path = %config_path.display(), "Configuration loaded");

        Ok(Self {
            config,
            config_path,
        })
    }

    /// Open the train store described by the configuration.
    pub fn open_store(&self) -> TrainStore {
        bootstrap::open_store(&self.config, &paths::home_dir())
    }
}

/// Log level implied by repeated `-v` flags.
fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Print a source-annotated report for TOML syntax errors.
fn load_with_diagnostics(path: &Path, result: Result<Config>) -> Result<Config> {
    if output::is_json() {
        return result;
    }
    if let Err(Error::Config(ConfigError::Parse(err))) = &result {
        if let Ok(src) = std::fs::read_to_string(path) {
            if let Some(report) = ConfigDiagnostic::from_toml(err, &src) {
                eprintln!("{}", diagnostic::render(&report));
            }
        }
    }
    result
}
