//! Sidebar collapsed state, written through to the preference store.

use crate::backend::utils::preferences::{PreferenceStore, SIDEBAR_COLLAPSED_KEY};
use std::sync::Arc;

pub struct SidebarPreference {
    store: Arc<dyn PreferenceStore>,
    collapsed: bool,
}

impl SidebarPreference {
    /// Restores the saved state, expanded when nothing usable is stored.
    ///
    /// The initial value is written back right away so the store matches
    /// memory before any interaction.
    pub fn mount(store: Arc<dyn PreferenceStore>) -> Self {
        let collapsed = read_collapsed(store.as_ref()).unwrap_or(false);
        let preference = Self { store, collapsed };
        preference.persist();
        preference
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
        self.persist();
    }

    /// Flips the state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_collapsed(!self.collapsed);
        self.collapsed
    }

    fn persist(&self) {
        if let Err(e) = self
            .store
            .set(SIDEBAR_COLLAPSED_KEY, &self.collapsed.to_string())
        {
            log::warn!("Failed to save sidebar state: {e}");
        }
    }
}

/// Parses a stored flag (`"true"` / `"false"`).
pub fn parse_collapsed(raw: &str) -> Option<bool> {
    serde_json::from_str::<bool>(raw.trim()).ok()
}

fn read_collapsed(store: &dyn PreferenceStore) -> Option<bool> {
    let raw = store.get(SIDEBAR_COLLAPSED_KEY)?;
    let parsed = parse_collapsed(&raw);
    if parsed.is_none() {
        log::warn!("Ignoring malformed {SIDEBAR_COLLAPSED_KEY} value {raw:?}");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::utils::preferences::{FilePreferenceStore, MemoryPreferenceStore};
    use crate::utils::Result;

    fn stored(store: &dyn PreferenceStore) -> Option<bool> {
        store.get(SIDEBAR_COLLAPSED_KEY).as_deref().and_then(parse_collapsed)
    }

    #[test]
    fn empty_store_starts_expanded() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let sidebar = SidebarPreference::mount(store.clone());

        assert!(!sidebar.is_collapsed());
        assert_eq!(stored(&*store), Some(false));
    }

    #[test]
    fn saved_true_is_restored() {
        let store = Arc::new(MemoryPreferenceStore::with_entry(SIDEBAR_COLLAPSED_KEY, "true"));
        assert!(SidebarPreference::mount(store).is_collapsed());
    }

    #[test]
    fn malformed_value_falls_back_and_is_overwritten() {
        for raw in ["yes", "", "1", "\"true\"", "{"] {
            let store = Arc::new(MemoryPreferenceStore::with_entry(SIDEBAR_COLLAPSED_KEY, raw));
            let sidebar = SidebarPreference::mount(store.clone());

            assert!(!sidebar.is_collapsed(), "{raw:?}");
            assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY).as_deref(), Some("false"));
        }
    }

    #[test]
    fn every_toggle_is_written_through() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut sidebar = SidebarPreference::mount(store.clone());

        for _ in 0..5 {
            let now = sidebar.toggle();
            assert_eq!(now, sidebar.is_collapsed());
            assert_eq!(stored(&*store), Some(now));
        }
    }

    #[test]
    fn double_toggle_restores_memory_and_store() {
        let store = Arc::new(MemoryPreferenceStore::with_entry(SIDEBAR_COLLAPSED_KEY, "true"));
        let mut sidebar = SidebarPreference::mount(store.clone());
        let original = store.get(SIDEBAR_COLLAPSED_KEY);

        sidebar.toggle();
        sidebar.toggle();

        assert!(sidebar.is_collapsed());
        assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY), original);
    }

    #[test]
    fn state_survives_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut sidebar = SidebarPreference::mount(Arc::new(FilePreferenceStore::open(&path)));
        sidebar.set_collapsed(true);
        drop(sidebar);

        let reopened = SidebarPreference::mount(Arc::new(FilePreferenceStore::open(&path)));
        assert!(reopened.is_collapsed());
    }

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            Some("true".to_string())
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(crate::simple_error!("read-only"))
        }
    }

    #[test]
    fn write_failures_do_not_reach_the_caller() {
        let mut sidebar = SidebarPreference::mount(Arc::new(ReadOnlyStore));
        assert!(sidebar.is_collapsed());
        assert!(!sidebar.toggle());
    }
}
