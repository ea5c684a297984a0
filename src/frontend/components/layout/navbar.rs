use crate::backend::utils::route::Route;
use crate::frontend::services::context::SessionState;
use crate::frontend::services::socket::{LinkStatus, RealtimeLink};
use dioxus::prelude::*;
use dioxus_router::{navigator, use_route};

#[component]
pub fn Navbar(on_toggle: EventHandler<()>) -> Element {
    let nav = navigator();
    let route = use_route::<Route>();
    let session = use_context::<SessionState>();
    let link = use_context::<RealtimeLink>();

    let name = session.shown_name();
    let online = link.status() == LinkStatus::Connected;

    rsx! {
        header { class: "navbar",
            button {
                class: "navbar-toggle",
                title: "Toggle sidebar",
                onclick: move |_| on_toggle.call(()),
                "☰"
            }

            h1 { class: "navbar-title", {route.title()} }

            div { class: "navbar-right",
                span {
                    class: if online { "link-dot link-online" } else { "link-dot link-offline" },
                    title: if online { "Live" } else { "Offline" },
                }
                span { class: "navbar-user", "{name}" }
                button {
                    class: "navbar-signout",
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
        }
    }
}
