use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardFooter, CardHeader, CardTitle, Input};

/// Where to land after signing in: the guarded page that sent us here, or
/// home when the return path is missing or unknown.
fn destination(redirect: Option<&str>) -> Route {
    redirect
        .filter(|path| path.starts_with('/') && !path.starts_with("/login"))
        .and_then(|path| path.parse::<Route>().ok())
        .unwrap_or(Route::Home {})
}

/// Email/password sign-in. `redirect` carries the path the access gate
/// bounced us from.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let redirect_target = use_signal(move || redirect);

    if auth.is_authenticated() {
        navigator().replace(destination(redirect_target.read().as_deref()));
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        if email().trim().is_empty() || password().is_empty() {
            error_msg.set(Some("Enter your email and password.".to_string()));
            return;
        }

        loading.set(true);
        error_msg.set(None);

        match auth.login(email().trim().to_string(), password()).await {
            Ok(_) => {
                navigator().replace(destination(redirect_target.read().as_deref()));
            }
            Err(e) => {
                tracing::warn!(error = %e, "sign-in failed");
                error_msg.set(Some(e.friendly_message()));
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                }

                CardContent {
                    p { class: "auth-subtitle", "Sign in to reach your sourcing dashboard." }

                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            id: "email",
                            placeholder: "you@company.com",
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            id: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "button auth-submit",
                            "data-style": "default",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Buyer and manufacturer accounts are issued by the platform team."
                    }
                }
            }
        }
    }
}
