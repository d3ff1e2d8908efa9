//! Theme preference store
//!
//! The user picks Light, Dark or System. System follows the host's reported
//! scheme, and a host that reports nothing definite is treated as dark.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::VennError;
use crate::storage::{KeyValueStore, StorageError, THEME_MODE_KEY};

/// The user's theme choice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Parse a persisted or user-supplied mode
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = VennError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            VennError::Validation(format!(
                "Unknown theme mode '{}' (expected light, dark or system)",
                s
            ))
        })
    }
}

/// What the host platform reports as its color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HostScheme {
    Light,
    Dark,
    #[default]
    Unknown,
}

impl HostScheme {
    /// Lenient parse; anything unrecognized is `Unknown`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::Unknown,
        }
    }
}

/// A concrete scheme to render with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Light,
    Dark,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Resolve a mode against the host scheme
pub fn resolve(mode: ThemeMode, host: HostScheme) -> Scheme {
    match mode {
        ThemeMode::Light => Scheme::Light,
        ThemeMode::Dark => Scheme::Dark,
        ThemeMode::System => match host {
            HostScheme::Light => Scheme::Light,
            HostScheme::Dark | HostScheme::Unknown => Scheme::Dark,
        },
    }
}

/// Persisted theme mode
pub struct ThemeStore {
    kv: Arc<dyn KeyValueStore>,
    mode: ThemeMode,
}

impl ThemeStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            mode: ThemeMode::default(),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Read the persisted mode, keeping `System` when absent or unreadable
    pub fn initialize(&mut self) -> Result<(), StorageError> {
        match self.kv.get(THEME_MODE_KEY) {
            Ok(Some(value)) => {
                self.mode = ThemeMode::parse(&value).unwrap_or_else(|| {
                    debug!(value = %value, "Ignoring unknown persisted theme mode");
                    ThemeMode::System
                });
                Ok(())
            }
            Ok(None) => {
                self.mode = ThemeMode::System;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Could not read theme mode, using system");
                self.mode = ThemeMode::System;
                Err(e)
            }
        }
    }

    /// Set and persist the mode; the in-memory mode changes even if the write fails
    pub fn set_mode(&mut self, mode: ThemeMode) -> Result<(), StorageError> {
        self.mode = mode;
        self.kv.set(THEME_MODE_KEY, mode.as_str()).inspect_err(|e| {
            warn!(error = %e, "Could not persist theme mode");
        })
    }

    pub fn resolve(&self, host: HostScheme) -> Scheme {
        resolve(self.mode, host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::testing::FailingStore;
    use crate::storage::MemoryStore;

    #[test]
    fn test_default_resolves_unknown_host_to_dark() {
        let mut store = ThemeStore::new(Arc::new(MemoryStore::new()));
        store.initialize().unwrap();

        assert_eq!(store.mode(), ThemeMode::System);
        assert_eq!(store.resolve(HostScheme::Unknown), Scheme::Dark);
        assert_eq!(store.resolve(HostScheme::parse("no-preference")), Scheme::Dark);
        assert_eq!(store.resolve(HostScheme::Light), Scheme::Light);
    }

    #[test]
    fn test_explicit_modes_ignore_host() {
        assert_eq!(resolve(ThemeMode::Light, HostScheme::Dark), Scheme::Light);
        assert_eq!(resolve(ThemeMode::Dark, HostScheme::Light), Scheme::Dark);
    }

    #[test]
    fn test_set_mode_persists() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut store = ThemeStore::new(kv.clone());
        store.set_mode(ThemeMode::Light).unwrap();
        assert_eq!(kv.get(THEME_MODE_KEY).unwrap().as_deref(), Some("light"));

        let mut next = ThemeStore::new(kv);
        next.initialize().unwrap();
        assert_eq!(next.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_unknown_persisted_value_reads_as_system() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(THEME_MODE_KEY, "sepia").unwrap();

        let mut store = ThemeStore::new(kv);
        store.initialize().unwrap();
        assert_eq!(store.mode(), ThemeMode::System);
    }

    #[test]
    fn test_storage_failure_keeps_defaults() {
        let mut store = ThemeStore::new(Arc::new(FailingStore));
        assert!(store.initialize().is_err());
        assert_eq!(store.mode(), ThemeMode::System);

        assert!(store.set_mode(ThemeMode::Dark).is_err());
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("DARK".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("blue".parse::<ThemeMode>().unwrap_err().is_validation());
    }
}
