use crate::backend::utils::route::{Route, settle};
use crate::frontend::services::context::{SessionOracle, SessionState};
use dioxus::prelude::*;
use dioxus_router::navigator;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = navigator();
    let session = use_context::<SessionState>();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "page not-found",
            h2 { class: "page-title", "Page not found" }
            p { class: "empty", "Nothing lives at {path}" }
            button {
                class: "button-primary",
                onclick: move |_| {
                    nav.replace(settle(Route::Root {}, session.is_authenticated()));
                },
                "Go home"
            }
        }
    }
}
