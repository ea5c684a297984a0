use crate::frontend::services::events::{DomainEvent, EventFeed, EventLevel};
use dioxus::prelude::*;

#[component]
pub fn EventsPage() -> Element {
    let mut feed = use_context::<EventFeed>();
    let mut level = use_signal(|| None::<EventLevel>);

    let selected = level();
    let events = feed.snapshot(|e| selected.is_none_or(|l| e.level == l));

    rsx! {
        section { class: "page",
            div { class: "page-toolbar",
                button {
                    class: if selected.is_none() { "chip chip-active" } else { "chip" },
                    onclick: move |_| level.set(None),
                    "All"
                }
                for option in EventLevel::ALL {
                    button {
                        key: "{option:?}",
                        class: if selected == Some(option) { "chip chip-active" } else { "chip" },
                        onclick: move |_| level.set(Some(option)),
                        {option.as_str()}
                    }
                }
                button { class: "button-secondary", onclick: move |_| feed.clear(), "Clear" }
            }

            EventList { events, empty: "No events yet" }
        }
    }
}

#[component]
pub fn EventList(events: Vec<DomainEvent>, empty: &'static str) -> Element {
    if events.is_empty() {
        return rsx! { p { class: "empty", "{empty}" } };
    }

    rsx! {
        ul { class: "event-list",
            for event in events {
                li { key: "{event.id}", class: format!("event-row event-{}", event.level.as_str()),
                    span { class: "event-time", {event.at.format("%H:%M:%S").to_string()} }
                    span { class: "event-source", "{event.source}" }
                    span { class: "event-message", "{event.message}" }
                }
            }
        }
    }
}
