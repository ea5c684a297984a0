use crate::backend::utils::route::Route;
use crate::frontend::services::context::SessionState;
use crate::frontend::services::sidebar::SidebarPreference;
use dioxus::prelude::*;
use dioxus_router::navigator;

#[component]
pub fn SettingsPage() -> Element {
    let nav = navigator();
    let session = use_context::<SessionState>();
    let mut sidebar = use_context::<Signal<SidebarPreference>>();

    let name = session.shown_name();
    let username = session.username().unwrap_or_default();
    let collapsed = sidebar.read().is_collapsed();

    rsx! {
        section { class: "page",
            div { class: "settings-panel",
                h3 { class: "section-title", "Account" }
                p { class: "settings-detail", "{name} ({username})" }
                button {
                    class: "button-secondary",
                    onclick: move |_| {
                        let mut session = session.clone();
                        spawn(async move {
                            session.logout().await;
                            nav.replace(Route::Login {});
                        });
                    },
                    "Sign out"
                }
            }

            div { class: "settings-panel",
                h3 { class: "section-title", "Layout" }
                label { class: "settings-toggle",
                    input {
                        r#type: "checkbox",
                        checked: collapsed,
                        onchange: move |e| sidebar.write().set_collapsed(e.checked()),
                    }
                    "Collapse sidebar"
                }
            }
        }
    }
}
