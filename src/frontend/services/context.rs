//! Session and preference contexts.

use crate::backend::services::{SessionRecord, SessionStore};
use crate::backend::utils::preferences::PreferenceStore;
use crate::simple_error;
use crate::utils::Result;
use dioxus::prelude::*;
use std::sync::Arc;

/// Answers whether someone is signed in right now.
pub trait SessionOracle {
    fn is_authenticated(&self) -> bool;
}

/// Session scope provided at the application root.
#[derive(Clone)]
pub struct SessionState {
    pub current: Signal<Option<SessionRecord>>,
    store: SessionStore,
}

impl SessionOracle for SessionState {
    fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }
}

impl SessionState {
    pub fn new(store: SessionStore, restored: Option<SessionRecord>) -> Self {
        Self {
            current: Signal::new(restored),
            store,
        }
    }

    /// Signs in with a username and saves the session.
    pub async fn login(&mut self, username: String) -> Result<()> {
        self.start(SessionRecord::new(username)).await
    }

    /// Creates an offline account and signs it in.
    pub async fn register(&mut self, username: String, display_name: String) -> Result<()> {
        self.start(SessionRecord::new(username).with_display_name(&display_name))
            .await
    }

    async fn start(&mut self, record: SessionRecord) -> Result<()> {
        if !SessionRecord::is_valid_username(&record.username) {
            return Err(simple_error!(
                "Username must be 3-16 characters long and can only contain letters, numbers, and underscores"
            ));
        }

        self.store
            .save(&record)
            .await
            .map_err(|e| e.context("saving session"))?;

        log::info!("Signed in as {}", record.username);
        self.current.set(Some(record));
        Ok(())
    }

    /// Signs out and forgets the saved session.
    pub async fn logout(&mut self) {
        self.current.set(None);
        if let Err(e) = self.store.delete().await {
            log::warn!("Failed to delete session file: {e}");
        }
        log::info!("Signed out");
    }

    pub fn username(&self) -> Option<String> {
        self.current.read().as_ref().map(|record| record.username.clone())
    }

    /// Display name, or the username when none was given.
    pub fn shown_name(&self) -> String {
        self.current
            .read()
            .as_ref()
            .map_or_else(String::new, |record| record.shown_name().to_string())
    }
}

/// Where the session lives and what was found there at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSeed {
    pub store: SessionStore,
    pub restored: Option<SessionRecord>,
}

/// Provides [`SessionState`] to everything below it.
#[component]
pub fn SessionScope(seed: SessionSeed, children: Element) -> Element {
    use_context_provider(move || SessionState::new(seed.store, seed.restored));
    children
}

/// Shared handle to the preference store.
#[derive(Clone)]
pub struct Preferences {
    store: Arc<dyn PreferenceStore>,
}

impl Preferences {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> Arc<dyn PreferenceStore> {
        Arc::clone(&self.store)
    }
}
