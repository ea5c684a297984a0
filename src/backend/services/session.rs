//! Persisted sign-in session.

use crate::utils::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

const MAX_DISPLAY_NAME: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub signed_in_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Creates a record for `username` signed in right now.
    pub fn new(username: String) -> Self {
        Self {
            username,
            display_name: None,
            signed_in_at: Utc::now(),
        }
    }

    pub fn with_display_name(mut self, display_name: &str) -> Self {
        let trimmed = display_name.trim();
        self.display_name = (!trimmed.is_empty())
            .then(|| trimmed.chars().take(MAX_DISPLAY_NAME).collect());
        self
    }

    /// Validates if a username meets the requirements.
    pub fn is_valid_username(username: &str) -> bool {
        (3..=16).contains(&username.len())
            && username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Name shown in the navbar.
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

/// Location of the session file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Saves the record to disk.
    pub async fn save(&self, record: &SessionRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json).await?;

        Ok(())
    }

    /// Loads the saved record. Missing or unreadable files mean no session.
    pub async fn load(&self) -> Option<SessionRecord> {
        if !self.path.exists() {
            return None;
        }

        match fs::read_to_string(&self.path).await {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("Discarding malformed session file: {e}");
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read session file: {e}");
                None
            }
        }
    }

    /// Deletes the session file.
    pub async fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rules() {
        assert!(SessionRecord::is_valid_username("ops_lead"));
        assert!(!SessionRecord::is_valid_username("ab"));
        assert!(!SessionRecord::is_valid_username("seventeen_chars_x"));
        assert!(!SessionRecord::is_valid_username("has space"));
    }

    #[test]
    fn blank_display_name_falls_back_to_username() {
        let record = SessionRecord::new("ops_lead".into()).with_display_name("   ");
        assert_eq!(record.display_name, None);
        assert_eq!(record.shown_name(), "ops_lead");

        let named = SessionRecord::new("ops_lead".into()).with_display_name(" Dana ");
        assert_eq!(named.shown_name(), "Dana");
    }

    #[tokio::test]
    async fn record_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("session.json"));
        let record = SessionRecord::new("ops_lead".into());

        store.save(&record).await.unwrap();
        assert_eq!(store.load().await, Some(record));

        store.delete().await.unwrap();
        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn malformed_file_means_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{\"username\":").unwrap();

        assert_eq!(SessionStore::new(path).load().await, None);
    }
}
