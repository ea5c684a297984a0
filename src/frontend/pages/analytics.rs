use crate::frontend::services::events::{EventFeed, EventLevel};
use dioxus::prelude::*;

#[component]
pub fn AnalyticsPage() -> Element {
    let feed = use_context::<EventFeed>();
    let history = feed.log.read();
    let total = history.len();
    let sources = history.count_by_source();
    let levels: Vec<(EventLevel, usize)> =
        EventLevel::ALL.iter().map(|&level| (level, history.count(level))).collect();
    drop(history);
    let no_sources = sources.is_empty();

    rsx! {
        section { class: "page",
            h3 { class: "section-title", "By level" }
            for (level, count) in levels {
                div { key: "{level:?}", class: "bar-row",
                    span { class: "bar-label", {level.as_str()} }
                    div {
                        class: format!("bar bar-{}", level.as_str()),
                        style: format!("width: {}%;", share(count, total)),
                    }
                    span { class: "bar-value", "{count}" }
                }
            }

            h3 { class: "section-title", "By source" }
            if no_sources {
                p { class: "empty", "No data yet" }
            }
            table { class: "source-table",
                for (source, count) in sources {
                    tr { key: "{source}",
                        td { "{source}" }
                        td { "{count}" }
                    }
                }
            }
        }
    }
}

/// Percentage of `total`, 0 when there is nothing to compare against.
fn share(count: usize, total: usize) -> usize {
    if total == 0 { 0 } else { count * 100 / total }
}
