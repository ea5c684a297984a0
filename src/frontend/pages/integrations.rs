use crate::frontend::services::events::{DomainEvent, EventLevel};
use crate::frontend::services::socket::{LinkStatus, RealtimeLink};
use dioxus::prelude::*;

#[component]
pub fn IntegrationsPage() -> Element {
    let link = use_context::<RealtimeLink>();
    let status = link.status();
    let subscribers = link.subscribers();

    rsx! {
        section { class: "page",
            div { class: "integration-card",
                h3 { class: "section-title", "Realtime link" }
                p {
                    class: if status == LinkStatus::Connected { "status status-online" } else { "status status-offline" },
                    {format!("{status:?}")}
                }
                p { class: "integration-detail", "{subscribers} listeners" }
                div { class: "page-toolbar",
                    for level in EventLevel::ALL {
                        button {
                            key: "{level:?}",
                            class: "button-secondary",
                            disabled: status != LinkStatus::Connected,
                            onclick: {
                                let link = link.clone();
                                move |_| {
                                    link.publish(DomainEvent::new(
                                        level,
                                        "integrations",
                                        format!("Test {} event", level.as_str()),
                                    ));
                                }
                            },
                            {format!("Send {}", level.as_str())}
                        }
                    }
                }
            }
        }
    }
}
