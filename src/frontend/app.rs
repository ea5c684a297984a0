//! Application root.
//!
//! Scopes are nested session → events → socket, so every page (guarded or
//! not) can reach all three with `use_context`.

use crate::backend::services::{SessionRecord, SessionStore};
use crate::backend::utils::preferences::{MemoryPreferenceStore, PreferenceStore};
use crate::backend::utils::route::Route;
use crate::frontend::services::context::{Preferences, SessionScope, SessionSeed};
use crate::frontend::services::events::EventScope;
use crate::frontend::services::socket::SocketScope;
use dioxus::prelude::*;
use dioxus_router::Router;
use std::sync::{Arc, OnceLock};

const SHELL_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styles/shell.css"
));

static BOOTSTRAP: OnceLock<Bootstrap> = OnceLock::new();

/// Everything resolved before the window opens.
pub struct Bootstrap {
    pub preferences: Arc<dyn PreferenceStore>,
    pub session_store: SessionStore,
    pub restored: Option<SessionRecord>,
}

impl Bootstrap {
    /// Nothing persisted across runs. Used when `install` was never called.
    pub fn ephemeral() -> Self {
        Self {
            preferences: Arc::new(MemoryPreferenceStore::new()),
            session_store: SessionStore::new(std::env::temp_dir().join("event-pulse-session.json")),
            restored: None,
        }
    }
}

pub fn install(bootstrap: Bootstrap) {
    if BOOTSTRAP.set(bootstrap).is_err() {
        log::warn!("Application was already bootstrapped");
    }
}

#[component]
pub fn AppRoot() -> Element {
    let bootstrap = BOOTSTRAP.get_or_init(|| {
        log::warn!("No bootstrap installed, preferences will not persist");
        Bootstrap::ephemeral()
    });
    use_context_provider(|| Preferences::new(Arc::clone(&bootstrap.preferences)));

    rsx! {
        style { dangerous_inner_html: SHELL_CSS }

        SessionScope {
            seed: SessionSeed {
                store: bootstrap.session_store.clone(),
                restored: bootstrap.restored.clone(),
            },
            EventScope {
                SocketScope {
                    Router::<Route> {}
                }
            }
        }
    }
}
