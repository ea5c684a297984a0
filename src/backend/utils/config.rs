//! Application configuration, stored as `config.json` in the data directory.

use crate::utils::logging::DEFAULT_FILTER;
use crate::utils::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowSettings,
    pub storage: StorageConfig,
    pub log_filter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Key-value file backing UI preferences.
    pub preferences_file: String,
    /// File holding the signed-in session.
    pub session_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            storage: StorageConfig::default(),
            log_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Event Pulse".to_string(),
            width: 1280.0,
            height: 832.0,
            resizable: true,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            preferences_file: "preferences.json".to_string(),
            session_file: "session.json".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the config from `path`.
    ///
    /// A missing file is not an error and yields the defaults. Unknown
    /// or absent fields fall back to their defaults too; only a file that
    /// cannot be read or parsed at all is reported.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| Error::from(e).context("reading config"))?;
        serde_json::from_str(&content).map_err(|e| Error::from(e).context("parsing config"))
    }

    /// Writes the config to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "log_filter": "debug", "window": { "width": 900 } }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.window.width, 900.0);
        assert_eq!(config.window.title, "Event Pulse");
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("parsing config: JSON error"));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = AppConfig::default();
        config.storage.session_file = "alt-session.json".to_string();

        config.save(&path).unwrap();
        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }
}
