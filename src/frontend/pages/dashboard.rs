use crate::frontend::pages::events::EventList;
use crate::frontend::services::context::SessionState;
use crate::frontend::services::events::{EventFeed, EventLevel};
use dioxus::prelude::*;

const RECENT: usize = 5;

#[component]
pub fn DashboardPage() -> Element {
    let session = use_context::<SessionState>();
    let feed = use_context::<EventFeed>();

    let name = session.shown_name();
    let total = feed.log.read().len();
    let recent: Vec<_> = feed.snapshot(|_| true).into_iter().take(RECENT).collect();

    rsx! {
        section { class: "page",
            h2 { class: "page-title", "Hello, {name}" }

            div { class: "stat-grid",
                div { class: "stat-card",
                    span { class: "stat-label", "total" }
                    span { class: "stat-value", "{total}" }
                }
                for level in EventLevel::ALL {
                    div { key: "{level:?}", class: format!("stat-card stat-{}", level.as_str()),
                        span { class: "stat-label", {level.as_str()} }
                        span { class: "stat-value", {feed.count(level).to_string()} }
                    }
                }
            }

            h3 { class: "section-title", "Recent activity" }
            EventList { events: recent, empty: "Nothing has happened yet" }
        }
    }
}
