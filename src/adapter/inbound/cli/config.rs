//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{output, paths};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!(
        "2. Run: captrain config validate -c {}",
        path.display()
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(config: &Config, path: &Path) -> Result<()> {
    let data_dir = config.storage.resolve_dir(&paths::home_dir());

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "logging": {
                "level": config.logging.level,
                "format": config.logging.format,
            },
            "storage": {
                "enabled": config.storage.enabled,
                "data_dir": data_dir.display().to_string(),
                "key": config.storage.key,
            },
            "board": {
                "public_limit": config.board.public_limit,
                "refresh_interval_secs": config.board.refresh_interval_secs,
                "min_lead_hours": config.board.min_lead_hours,
            },
            "corridors": config.corridors,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field(
        "Source",
        if path.exists() {
            path.display().to_string()
        } else {
            "(defaults)".to_string()
        },
    );

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Storage");
    if config.storage.enabled {
        let slot = data_dir.join(format!("{}.json", config.storage.key));
        output::field("Snapshot", slot.display());
    } else {
        output::warning("Persistence disabled; changes are not kept between runs");
    }

    output::section("Board");
    output::field("Public limit", config.board.public_limit);
    output::field("Refresh", format!("{}s", config.board.refresh_interval_secs));
    output::field("Min lead", format!("{}h", config.board.min_lead_hours));

    output::section("Corridors");
    for corridor in &config.corridors {
        output::note(&format!("- {} ({})", corridor.name, corridor.id));
    }

    Ok(())
}

/// Execute `config validate`.
///
/// Loading already validated the file, so reaching this point means it is
/// valid.
pub fn execute_validate(path: &Path) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
        }));
        return Ok(());
    }

    output::section("Config Validation");
    output::field("Path", path.display());
    if path.exists() {
        output::success("Config file is valid");
    } else {
        output::success("No config file; defaults are valid");
        output::hint("create one with `captrain config init`");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temp directory")
    }

    #[test]
    fn test_config_template_parses_to_defaults() {
        let config = Config::parse_toml(CONFIG_TEMPLATE).unwrap();
        let defaults = Config::default();

        assert_eq!(config.board.public_limit, defaults.board.public_limit);
        assert_eq!(config.storage.key, defaults.storage.key);
        assert_eq!(config.corridors, defaults.corridors);
    }

    #[test]
    fn test_execute_init_writes_template_content() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");

        execute_init(&config_path, false).unwrap();
        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, CONFIG_TEMPLATE);
    }

    #[test]
    fn test_execute_init_creates_parent_directories() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        assert!(execute_init(&config_path, false).is_ok());
        assert!(config_path.exists());
    }

    #[test]
    fn test_execute_init_fails_if_file_exists_without_force() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "existing content").unwrap();

        assert!(execute_init(&config_path, false).is_err());
        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, "existing content");
    }

    #[test]
    fn test_execute_init_overwrites_with_force() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "existing content").unwrap();

        assert!(execute_init(&config_path, true).is_ok());
        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, CONFIG_TEMPLATE);
    }
}
