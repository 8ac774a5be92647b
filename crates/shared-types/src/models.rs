use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// Marketplace role carried on every user account.
///
/// - `Admin`: platform operator, approves RFQs and manages the catalog.
/// - `Manufacturer`: lists fabrics and bids on RFQs.
/// - `Buyer`: searches the catalog, raises RFQs, orders samples.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manufacturer,
    Buyer,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Manufacturer, UserRole::Buyer];

    /// Parse a role claim. Unknown values are rejected rather than defaulted,
    /// so a malformed session never gains a role it was not given.
    pub fn parse_role(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(UserRole::Admin),
            "manufacturer" => Some(UserRole::Manufacturer),
            "buyer" => Some(UserRole::Buyer),
            _ => None,
        }
    }

    /// Lowercase string as stored server-side.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manufacturer => "manufacturer",
            UserRole::Buyer => "buyer",
        }
    }
}

/// Roles are decoded through [`UserRole::parse_role`], so `"Buyer"` and
/// `"buyer"` agree and anything else fails the whole payload.
impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        UserRole::parse_role(&raw).ok_or_else(|| {
            de::Error::unknown_variant(&raw, &["admin", "manufacturer", "buyer"])
        })
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user as reported by `/api/auth/me` and the login response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    /// Company name; shown as the display name.
    #[serde(default)]
    pub name: Option<String>,
    pub role: UserRole,
}

impl AuthUser {
    /// Name for greetings, falling back to the role label.
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => match self.role {
                UserRole::Admin => "Admin".to_string(),
                UserRole::Manufacturer => "Manufacturer".to_string(),
                UserRole::Buyer => "Buyer".to_string(),
            },
        }
    }
}

/// Snapshot of the authentication collaborator's state.
///
/// Read-only to everything in this workspace except the auth context that
/// produces it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub user: Option<AuthUser>,
    pub is_loading: bool,
}

impl Session {
    /// Session whose user is still being resolved.
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }

    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Login request body for `/api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user_profile: AuthUser,
}
