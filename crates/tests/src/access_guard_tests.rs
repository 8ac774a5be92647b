use pretty_assertions::assert_eq;
use shared_types::{
    evaluate_access, evaluate_access_any, AccessDecision, AuthUser, Redirect, Session, UserRole,
};

fn user(role: UserRole) -> AuthUser {
    AuthUser {
        id: 42,
        email: "buyer@linker.test".to_string(),
        name: Some("Acme Apparel".to_string()),
        role,
    }
}

fn sessions() -> Vec<Session> {
    let mut all = vec![Session::loading(), Session::anonymous()];
    all.extend(UserRole::ALL.iter().map(|r| Session::signed_in(user(*r))));
    // Loading wins even when a user is already attached.
    all.push(Session {
        user: Some(user(UserRole::Buyer)),
        is_loading: true,
    });
    all
}

fn requirements() -> Vec<Option<UserRole>> {
    let mut all = vec![None];
    all.extend(UserRole::ALL.iter().copied().map(Some));
    all
}

/// Exactly one outcome per input, decided in loading, auth, role order.
#[test]
fn decision_table_holds_for_every_input() {
    for session in sessions() {
        for required in requirements() {
            let decision = evaluate_access(&session, required, "/buyer");
            let expected = if session.is_loading {
                AccessDecision::Pending
            } else if session.user.is_none() {
                AccessDecision::Unauthenticated(Redirect {
                    to: "/login".to_string(),
                    return_to: Some("/buyer".to_string()),
                    replace: true,
                })
            } else if required.is_some_and(|r| session.role() != Some(r)) {
                AccessDecision::Forbidden(Redirect {
                    to: "/".to_string(),
                    return_to: None,
                    replace: true,
                })
            } else {
                AccessDecision::Authorized
            };
            assert_eq!(decision, expected, "session={session:?} required={required:?}");
        }
    }
}

/// The visited location, query included, is carried to the login page.
#[test]
fn login_redirect_remembers_location() {
    let decision = evaluate_access(
        &Session::anonymous(),
        Some(UserRole::Buyer),
        "/buyer?view=samples",
    );
    let redirect = decision.redirect().expect("redirect");
    assert_eq!(redirect.to, "/login");
    assert_eq!(redirect.return_to.as_deref(), Some("/buyer?view=samples"));
    assert!(redirect.replace);
}

#[test]
fn buyer_route_admits_only_buyers() {
    for role in UserRole::ALL {
        let decision = evaluate_access(&Session::signed_in(user(role)), Some(UserRole::Buyer), "/buyer");
        assert_eq!(decision.is_authorized(), role == UserRole::Buyer, "role={role:?}");
    }
}

#[test]
fn any_of_admits_listed_roles() {
    let roles = [UserRole::Admin, UserRole::Manufacturer];
    let admin = evaluate_access_any(&Session::signed_in(user(UserRole::Admin)), &roles, "/");
    let buyer = evaluate_access_any(&Session::signed_in(user(UserRole::Buyer)), &roles, "/");

    assert!(admin.is_authorized());
    assert!(matches!(buyer, AccessDecision::Forbidden(_)));
}

/// A role-less route still sends anonymous visitors to login.
#[test]
fn open_route_still_requires_a_user() {
    let decision = evaluate_access(&Session::anonymous(), None, "/");
    assert!(matches!(decision, AccessDecision::Unauthenticated(_)));
}
