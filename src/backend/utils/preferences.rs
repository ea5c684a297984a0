//! Key-value storage for UI preferences.
//!
//! Values are plain strings. The store outlives a single run of the app,
//! so whatever is written here is read back on the next launch.

use crate::utils::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Key under which the sidebar collapsed flag is stored.
pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";

/// Synchronous string key-value persistence.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`. The write is durable once this returns.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Preferences kept in a JSON object on disk.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FilePreferenceStore {
    /// Opens the store at `path`. An unreadable or corrupt file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::read_entries(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring preferences at {}: {e}", path.display());
            BTreeMap::new()
        });

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| crate::simple_error!("Preference store lock poisoned"))?;

        // Memory only changes once the file holds the new value.
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value.to_string());
        self.write_entries(&updated).map_err(|e| e.context("saving preferences"))?;
        *entries = updated;
        Ok(())
    }
}

/// Preferences that live only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| crate::simple_error!("Preference store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let store = FilePreferenceStore::open(&path);
        assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY), None);
        store.set(SIDEBAR_COLLAPSED_KEY, "true").unwrap();

        let reopened = FilePreferenceStore::open(&path);
        assert_eq!(reopened.get(SIDEBAR_COLLAPSED_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn set_is_on_disk_before_returning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs").join("preferences.json");

        let store = FilePreferenceStore::open(&path);
        store.set(SIDEBAR_COLLAPSED_KEY, "false").unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.get(SIDEBAR_COLLAPSED_KEY).map(String::as_str), Some("false"));
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let store = FilePreferenceStore::open(&path);
        assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY), None);

        store.set("theme", "dark").unwrap();
        assert_eq!(FilePreferenceStore::open(&path).get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn failed_write_leaves_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let prefs_dir = dir.path().join("prefs");
        let path = prefs_dir.join("preferences.json");

        let store = FilePreferenceStore::open(&path);
        store.set(SIDEBAR_COLLAPSED_KEY, "false").unwrap();

        // A plain file where the directory was makes every later write fail.
        std::fs::remove_dir_all(&prefs_dir).unwrap();
        std::fs::write(&prefs_dir, "").unwrap();

        let err = store.set(SIDEBAR_COLLAPSED_KEY, "true").unwrap_err();
        assert!(err.to_string().starts_with("saving preferences: IO error"));
        assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn failed_first_write_stores_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let store = FilePreferenceStore::open(blocker.join("preferences.json"));
        assert!(store.set(SIDEBAR_COLLAPSED_KEY, "true").is_err());
        assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY), None);
    }

    #[test]
    fn memory_store_overwrites() {
        let store = MemoryPreferenceStore::with_entry("k", "1");
        store.set("k", "2").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("2"));
    }
}
