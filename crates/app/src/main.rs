use dioxus::prelude::*;
use shared_types::AppConfig;

mod api;
mod auth;
mod components;
mod format_helpers;
mod routes;
use auth::AuthState;
use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    // Config is read once, after the runtime has installed its logger.
    let config: AppConfig =
        use_context_provider(|| console_core::config::load_config().clone());

    let auth = use_context_provider(AuthState::new);

    // Resolve whatever session we start with before any guard decides.
    use_hook(move || {
        tracing::info!(
            platform = client_platform(),
            api = %config.api.base_url,
            "starting LinkER"
        );
        spawn(async move {
            let mut auth = auth;
            auth.refresh().await;
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        Router::<Route> {}
    }
}
