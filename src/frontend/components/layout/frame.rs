//! Application frame wrapping every route.

use crate::backend::utils::route::Route;
use crate::frontend::components::layout::{Navbar, Sidebar};
use crate::frontend::services::context::{Preferences, SessionOracle, SessionState};
use crate::frontend::services::sidebar::SidebarPreference;
use dioxus::prelude::*;
use dioxus_router::components::Outlet;

/// Which parts of the frame surround the routed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub sidebar: bool,
    pub navbar: bool,
}

impl Chrome {
    /// Sidebar and navbar exist exactly while someone is signed in.
    pub fn for_session(session: &impl SessionOracle) -> Self {
        let signed_in = session.is_authenticated();
        Self {
            sidebar: signed_in,
            navbar: signed_in,
        }
    }
}

/// Sidebar and navbar around the routed page.
///
/// The chrome only exists while someone is signed in; the page itself is
/// always rendered through the outlet. The sidebar state is shared with
/// descendants so the settings page can change it too.
#[component]
pub fn Frame() -> Element {
    let session = use_context::<SessionState>();
    let preferences = use_context::<Preferences>();
    let mut sidebar =
        use_context_provider(move || Signal::new(SidebarPreference::mount(preferences.store())));

    let chrome = Chrome::for_session(&session);
    let collapsed = sidebar.read().is_collapsed();

    rsx! {
        div { class: "shell",
            if chrome.sidebar {
                Sidebar {
                    collapsed,
                    on_collapse: move |value: bool| sidebar.write().set_collapsed(value),
                }
            }

            div { class: "shell-body",
                if chrome.navbar {
                    Navbar {
                        on_toggle: move |_: ()| {
                            sidebar.write().toggle();
                        },
                    }
                }

                main { class: "shell-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
