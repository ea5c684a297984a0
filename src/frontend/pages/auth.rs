//! Sign-in and registration pages.
//!
//! Both stay reachable for a signed-in user. A successful submit always
//! lands on the dashboard.

use crate::backend::utils::route::Route;
use crate::frontend::services::context::SessionState;
use dioxus::prelude::*;
use dioxus_router::navigator;

#[component]
pub fn Login() -> Element {
    let nav = navigator();
    let session = use_context::<SessionState>();
    let mut username = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    rsx! {
        div { class: "auth-container",
            form {
                class: "auth-card",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    if busy() {
                        return;
                    }
                    let name = username.read().trim().to_string();
                    let mut session = session.clone();
                    busy.set(true);
                    error.set(None);
                    spawn(async move {
                        match session.login(name).await {
                            Ok(()) => {
                                nav.push(Route::landing());
                            }
                            Err(e) => {
                                log::warn!("Sign-in failed: {e}");
                                error.set(Some(e.message().to_string()));
                                busy.set(false);
                            }
                        }
                    });
                },

                h1 { class: "auth-title", "Welcome back" }
                input {
                    class: "auth-input",
                    r#type: "text",
                    maxlength: "16",
                    placeholder: "Username",
                    autofocus: true,
                    value: "{username}",
                    oninput: move |e| {
                        username.set(e.value());
                        error.set(None);
                    },
                }
                if let Some(message) = error() {
                    div { class: "auth-error", "{message}" }
                }
                button { class: "auth-submit", r#type: "submit", disabled: busy(), "Sign in" }
                button {
                    class: "auth-switch",
                    r#type: "button",
                    onclick: move |_| {
                        nav.push(Route::Register {});
                    },
                    "Create an account"
                }
            }
        }
    }
}

#[component]
pub fn Register() -> Element {
    let nav = navigator();
    let session = use_context::<SessionState>();
    let mut username = use_signal(String::new);
    let mut display_name = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    rsx! {
        div { class: "auth-container",
            form {
                class: "auth-card",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    if busy() {
                        return;
                    }
                    let name = username.read().trim().to_string();
                    let shown = display_name.read().clone();
                    let mut session = session.clone();
                    busy.set(true);
                    error.set(None);
                    spawn(async move {
                        match session.register(name, shown).await {
                            Ok(()) => {
                                nav.push(Route::landing());
                            }
                            Err(e) => {
                                log::warn!("Registration failed: {e}");
                                error.set(Some(e.message().to_string()));
                                busy.set(false);
                            }
                        }
                    });
                },

                h1 { class: "auth-title", "Create account" }
                input {
                    class: "auth-input",
                    r#type: "text",
                    maxlength: "16",
                    placeholder: "Username",
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
                input {
                    class: "auth-input",
                    r#type: "text",
                    maxlength: "32",
                    placeholder: "Display name (optional)",
                    value: "{display_name}",
                    oninput: move |e| display_name.set(e.value()),
                }
                if let Some(message) = error() {
                    div { class: "auth-error", "{message}" }
                }
                button { class: "auth-submit", r#type: "submit", disabled: busy(), "Create account" }
                button {
                    class: "auth-switch",
                    r#type: "button",
                    onclick: move |_| {
                        nav.push(Route::Login {});
                    },
                    "I already have an account"
                }
            }
        }
    }
}
