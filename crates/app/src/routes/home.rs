use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdLogOut};
use dioxus_free_icons::Icon;
use shared_types::UserRole;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};

/// Landing page for any signed-in user. Also where other roles end up when
/// they try to open the buyer console.
#[component]
pub fn Home() -> Element {
    let mut auth = use_auth();
    let user = auth.current_user.read().clone();

    let Some(user) = user else {
        return rsx! {};
    };
    let is_buyer = user.role == UserRole::Buyer;
    let name = user.display_name();
    let role = user.role.as_str();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home-page",
            Card { class: "home-card",
                CardHeader {
                    CardTitle { "Welcome, {name}" }
                }
                CardContent {
                    p { class: "home-role", "Signed in as {user.email} ({role})" }

                    if is_buyer {
                        Link { to: Route::Buyer {}, class: "home-console-link",
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                            span { "Open Buyer Console" }
                        }
                    } else {
                        p { class: "home-note",
                            "The buyer console is only available to buyer accounts."
                        }
                    }

                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "home-logout",
                        onclick: move |_| {
                            auth.logout();
                            navigator().replace(Route::Login { redirect: None });
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign out"
                    }
                }
            }
        }
    }
}
