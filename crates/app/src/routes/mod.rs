pub mod buyer;
pub mod home;
pub mod login;
pub mod not_found;

use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_types::{evaluate_requirement, AccessDecision, Redirect, RoleRequirement, UserRole};
use shared_ui::Spinner;

use buyer::Buyer;
use home::Home;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[layout(SignedIn)]
    #[route("/")]
    Home {},
    #[end_layout]
    #[layout(BuyerOnly)]
    #[route("/buyer")]
    Buyer {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Any signed-in user.
#[component]
fn SignedIn() -> Element {
    rsx! {
        AccessGate { requirement: RoleRequirement::Any,
            Outlet::<Route> {}
        }
    }
}

/// Buyers only; other roles are sent home.
#[component]
fn BuyerOnly() -> Element {
    rsx! {
        AccessGate { requirement: RoleRequirement::Exactly(UserRole::Buyer),
            Outlet::<Route> {}
        }
    }
}

/// Renders `children` only when the session satisfies `requirement`.
///
/// Re-evaluated whenever the session or location changes. Redirects replace
/// the current history entry.
#[component]
pub fn AccessGate(requirement: RoleRequirement, children: Element) -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let location = route.to_string();

    let decision = evaluate_requirement(&auth.session(), &requirement, &location);

    match decision {
        AccessDecision::Authorized => children,
        AccessDecision::Pending => rsx! {
            div { class: "access-gate-loading",
                Spinner {}
            }
        },
        AccessDecision::Unauthenticated(redirect) => {
            tracing::debug!(from = %location, "not signed in, redirecting to login");
            follow(
                &redirect,
                Route::Login {
                    redirect: redirect.return_to.clone(),
                },
            );
            rsx! {
                div { class: "access-gate-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        AccessDecision::Forbidden(redirect) => {
            tracing::debug!(from = %location, "role not permitted, redirecting home");
            follow(&redirect, Route::Home {});
            rsx! {
                div { class: "access-gate-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

fn follow(redirect: &Redirect, target: Route) {
    if redirect.replace {
        navigator().replace(target);
    } else {
        navigator().push(target);
    }
}
