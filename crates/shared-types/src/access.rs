//! Route access decisions.
//!
//! The guard is a pure function of the session, the role a view requires and
//! the location being visited. It never navigates; it returns an instruction
//! for the router to carry out.

use crate::models::{Session, UserRole};

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Where signed-in users without the required role are sent.
pub const HOME_PATH: &str = "/";

/// A navigation instruction produced by the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
    /// Location to return to after the user signs in.
    pub return_to: Option<String>,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

/// Outcome of evaluating a guarded route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session still resolving; show a placeholder and re-evaluate later.
    Pending,
    Unauthenticated(Redirect),
    Forbidden(Redirect),
    /// Render the guarded content unchanged.
    Authorized,
}

impl AccessDecision {
    pub fn is_authorized(&self) -> bool {
        matches!(self, AccessDecision::Authorized)
    }

    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            AccessDecision::Unauthenticated(r) | AccessDecision::Forbidden(r) => Some(r),
            AccessDecision::Pending | AccessDecision::Authorized => None,
        }
    }
}

/// Which roles a guarded route admits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoleRequirement {
    /// Any signed-in user.
    #[default]
    Any,
    Exactly(UserRole),
    AnyOf(Vec<UserRole>),
}

impl RoleRequirement {
    pub fn admits(&self, role: UserRole) -> bool {
        match self {
            RoleRequirement::Any => true,
            RoleRequirement::Exactly(required) => *required == role,
            RoleRequirement::AnyOf(roles) => roles.contains(&role),
        }
    }
}

impl From<Option<UserRole>> for RoleRequirement {
    fn from(role: Option<UserRole>) -> Self {
        match role {
            Some(role) => RoleRequirement::Exactly(role),
            None => RoleRequirement::Any,
        }
    }
}

/// Decide what a guarded route should do for `session` at `location`.
///
/// Checks run in a fixed order: loading, then authentication, then role.
pub fn evaluate_access(
    session: &Session,
    required_role: Option<UserRole>,
    location: &str,
) -> AccessDecision {
    evaluate_requirement(session, &RoleRequirement::from(required_role), location)
}

/// Like [`evaluate_access`], admitting any role in `roles`.
pub fn evaluate_access_any(session: &Session, roles: &[UserRole], location: &str) -> AccessDecision {
    evaluate_requirement(session, &RoleRequirement::AnyOf(roles.to_vec()), location)
}

pub fn evaluate_requirement(
    session: &Session,
    requirement: &RoleRequirement,
    location: &str,
) -> AccessDecision {
    if session.is_loading {
        return AccessDecision::Pending;
    }

    let Some(user) = session.user.as_ref() else {
        return AccessDecision::Unauthenticated(Redirect {
            to: LOGIN_PATH.to_string(),
            return_to: Some(location.to_string()),
            replace: true,
        });
    };

    if !requirement.admits(user.role) {
        return AccessDecision::Forbidden(Redirect {
            to: HOME_PATH.to_string(),
            return_to: None,
            replace: true,
        });
    }

    AccessDecision::Authorized
}
