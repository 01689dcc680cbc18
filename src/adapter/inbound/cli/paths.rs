//! Path utilities for captrain.
//!
//! All data lives under `~/.captrain/`:
//! - `~/.captrain/config.toml` - main configuration
//! - `~/.captrain/captrain_trains.json` - the train snapshot slot

use std::path::PathBuf;

use chrono::NaiveDate;

/// Returns the captrain home directory (`~/.captrain/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".captrain")
}

/// Returns the default config file path (`~/.captrain/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Default export file name for a given date.
pub fn export_file_name(date: NaiveDate) -> PathBuf {
    PathBuf::from(format!("captrain-export-{}.json", date.format("%Y-%m-%d")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_captrain_home() {
        let home = home_dir();
        let config = default_config();

        assert!(home.to_string_lossy().contains(".captrain"));
        assert!(config.to_string_lossy().contains(".captrain"));
    }

    #[test]
    fn export_name_carries_the_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(
            export_file_name(date),
            PathBuf::from("captrain-export-2026-10-19.json")
        );
    }
}
