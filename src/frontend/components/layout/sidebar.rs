use crate::backend::utils::route::Route;
use dioxus::prelude::*;
use dioxus_router::{navigator, use_route};

#[component]
pub fn Sidebar(collapsed: bool, on_collapse: EventHandler<bool>) -> Element {
    let nav = navigator();
    let route = use_route::<Route>();

    rsx! {
        aside { class: if collapsed { "sidebar sidebar-collapsed" } else { "sidebar" },
            div { class: "sidebar-header",
                span { class: "sidebar-brand",
                    if collapsed { "EP" } else { "Event Pulse" }
                }
                button {
                    class: "sidebar-collapse",
                    title: if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
                    onclick: move |_| on_collapse.call(!collapsed),
                    if collapsed { "»" } else { "«" }
                }
            }

            ul { class: "sidebar-items",
                for page in Route::guarded() {
                    li {
                        key: "{page}",
                        class: if page == route { "sidebar-item active" } else { "sidebar-item" },
                        title: page.title(),
                        onclick: {
                            let target = page.clone();
                            move |_| {
                                nav.push(target.clone());
                            }
                        },
                        span { class: "sidebar-icon", {initial(&page)} }
                        if !collapsed {
                            span { class: "sidebar-text", {page.title()} }
                        }
                    }
                }
            }
        }
    }
}

fn initial(page: &Route) -> String {
    page.title().chars().take(1).collect()
}
