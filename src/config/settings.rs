//! User settings for Venn
//!
//! Holds the timing knobs of the simulated flows and display defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::VennPaths;
use crate::error::VennError;

/// User settings for Venn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Simulated delay before login/signup completes
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,

    /// Simulated settlement delay for send/add/convert
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Simulated settlement delay for card issuing
    #[serde(default = "default_card_issue_delay_ms")]
    pub card_issue_delay_ms: u64,

    /// How long a notice stays visible
    #[serde(default = "default_notice_duration_ms")]
    pub notice_duration_ms: u64,

    /// Currency code used when none is given
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_login_delay_ms() -> u64 {
    800
}

fn default_settle_delay_ms() -> u64 {
    1500
}

fn default_card_issue_delay_ms() -> u64 {
    2000
}

fn default_notice_duration_ms() -> u64 {
    2500
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            login_delay_ms: default_login_delay_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            card_issue_delay_ms: default_card_issue_delay_ms(),
            notice_duration_ms: default_notice_duration_ms(),
            default_currency: default_currency(),
        }
    }
}

impl Settings {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn card_issue_delay(&self) -> Duration {
        Duration::from_millis(self.card_issue_delay_ms)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &VennPaths) -> Result<Self, VennError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| VennError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                VennError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &VennPaths) -> Result<(), VennError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| VennError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| VennError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.login_delay(), Duration::from_millis(800));
        assert_eq!(settings.settle_delay(), Duration::from_millis(1500));
        assert_eq!(settings.card_issue_delay(), Duration::from_secs(2));
        assert_eq!(settings.notice_duration(), Duration::from_millis(2500));
        assert_eq!(settings.default_currency, "USD");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VennPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            settle_delay_ms: 10,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.settle_delay_ms, 10);
        assert_eq!(loaded.login_delay_ms, 800);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VennPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"notice_duration_ms": 100}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.notice_duration_ms, 100);
        assert_eq!(loaded.card_issue_delay_ms, 2000);
    }

    #[test]
    fn test_unparsable_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VennPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, VennError::Config(_)));
    }
}
