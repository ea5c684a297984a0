//! Authentication guard for page views.

use crate::backend::utils::route::{RenderDecision, guard};
use crate::frontend::services::context::{SessionOracle, SessionState};
use dioxus::prelude::*;
use dioxus_router::navigator;

/// Mounts `children` only for a signed-in user, otherwise replaces the
/// current entry with the login page.
#[component]
pub fn Protected(children: Element) -> Element {
    let nav = navigator();
    let session = use_context::<SessionState>();

    match guard(session.is_authenticated(), move || children) {
        RenderDecision::Render(view) => view,
        RenderDecision::Redirect(target) => {
            nav.replace(target);
            rsx! { div {} }
        }
    }
}
