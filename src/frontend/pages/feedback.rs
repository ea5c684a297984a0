use crate::frontend::pages::events::EventList;
use crate::frontend::services::context::SessionState;
use crate::frontend::services::events::{DomainEvent, EventFeed, EventLevel};
use crate::frontend::services::socket::RealtimeLink;
use dioxus::prelude::*;

pub const FEEDBACK_SOURCE: &str = "feedback";

#[component]
pub fn FeedbackPage() -> Element {
    let session = use_context::<SessionState>();
    let feed = use_context::<EventFeed>();
    let link = use_context::<RealtimeLink>();
    let mut draft = use_signal(String::new);
    let mut notice = use_signal(|| None::<&'static str>);

    let entries = feed.snapshot(|e| e.source == FEEDBACK_SOURCE);

    rsx! {
        section { class: "page",
            form {
                class: "feedback-form",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    let text = draft.read().trim().to_string();
                    if text.is_empty() {
                        return;
                    }
                    let author = session.username().unwrap_or_default();
                    let event = DomainEvent::new(
                        EventLevel::Info,
                        FEEDBACK_SOURCE,
                        format!("{author}: {text}"),
                    );
                    if link.publish(event) {
                        draft.set(String::new());
                        notice.set(None);
                    } else {
                        notice.set(Some("Offline, feedback was not sent"));
                    }
                },

                textarea {
                    class: "feedback-input",
                    placeholder: "What should we know?",
                    value: "{draft}",
                    oninput: move |e| draft.set(e.value()),
                }
                if let Some(message) = notice() {
                    div { class: "auth-error", "{message}" }
                }
                button { class: "button-primary", r#type: "submit", "Send" }
            }

            EventList { events: entries, empty: "No feedback yet" }
        }
    }
}
