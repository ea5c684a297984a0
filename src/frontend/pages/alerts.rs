use crate::frontend::pages::events::EventList;
use crate::frontend::services::events::EventFeed;
use dioxus::prelude::*;

#[component]
pub fn AlertsPage() -> Element {
    let feed = use_context::<EventFeed>();
    let alerts = feed.snapshot(|e| e.level.is_alert());

    rsx! {
        section { class: "page",
            h2 { class: "page-title", {format!("{} open alerts", alerts.len())} }
            EventList { events: alerts, empty: "All clear" }
        }
    }
}
