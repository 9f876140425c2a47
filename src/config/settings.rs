//! User settings for the expense tracker
//!
//! Manages display preferences, the audit toggle and an optional override of
//! the data file location.

use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::ExpensePaths;
use crate::error::TrackerError;
use crate::storage::file_io::write_json_atomic;

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Data file location, when not the default one in the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Rs.".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            audit_enabled: default_audit_enabled(),
            data_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Config(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            Ok(settings.with_valid_date_format())
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    // Formatting a date with a broken strftime pattern panics, so reject it up front
    fn with_valid_date_format(mut self) -> Self {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            warn!(
                date_format = %self.date_format,
                "invalid date format in settings, using default"
            );
            self.date_format = default_date_format();
        }
        self
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
            .map_err(|e| TrackerError::Config(format!("Failed to write settings file: {}", e)))
    }

    /// Resolve the data file: explicit override, then settings, then default
    pub fn resolve_data_file(&self, paths: &ExpensePaths, override_path: Option<PathBuf>) -> PathBuf {
        override_path
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| paths.data_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "Rs.");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert!(settings.audit_enabled);
        assert!(settings.data_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.audit_enabled = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert!(!loaded.audit_enabled);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "EUR "}"#).unwrap();
        assert_eq!(settings.currency_symbol, "EUR ");
        assert_eq!(settings.schema_version, 1);
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_invalid_date_format_falls_back_to_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"currency_symbol": "$", "date_format": "%Y-%m-%"}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.date_format, "%Y-%m-%d");
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_valid_custom_date_format_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%d/%m/%Y"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_malformed_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }

    #[test]
    fn test_resolve_data_file_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        assert_eq!(settings.resolve_data_file(&paths, None), paths.data_file());

        settings.data_file = Some(PathBuf::from("/tmp/from-settings.json"));
        assert_eq!(
            settings.resolve_data_file(&paths, None),
            PathBuf::from("/tmp/from-settings.json")
        );

        assert_eq!(
            settings.resolve_data_file(&paths, Some(PathBuf::from("cli.json"))),
            PathBuf::from("cli.json")
        );
    }
}
