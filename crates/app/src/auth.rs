use dioxus::prelude::*;
use shared_types::{AppError, AuthUser, LoginRequest, Session};

use crate::api;

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
    /// True until the initial session check settles, and during refreshes.
    pub is_loading: Signal<bool>,
    token: Signal<Option<String>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            is_loading: Signal::new(true),
            token: Signal::new(None),
        }
    }

    /// Snapshot for the access guard. Reading subscribes the caller.
    pub fn session(&self) -> Session {
        Session {
            user: self.current_user.read().clone(),
            is_loading: *self.is_loading.read(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn set_user(&mut self, token: String, user: AuthUser) {
        self.token.set(Some(token));
        self.current_user.set(Some(user));
        self.is_loading.set(false);
    }

    pub fn clear_auth(&mut self) {
        self.token.set(None);
        self.current_user.set(None);
        self.is_loading.set(false);
    }

    /// Exchange credentials for a session.
    pub async fn login(&mut self, email: String, password: String) -> Result<AuthUser, AppError> {
        let response = api::client(None)
            .login(&LoginRequest { email, password })
            .await?;
        tracing::info!(
            user_id = response.user_profile.id,
            role = %response.user_profile.role,
            "signed in"
        );
        let user = response.user_profile.clone();
        self.set_user(response.token, response.user_profile);
        Ok(user)
    }

    /// Re-read the profile for the held token. Without a token the session
    /// resolves to signed out.
    pub async fn refresh(&mut self) {
        let Some(token) = self.token() else {
            self.clear_auth();
            return;
        };

        self.is_loading.set(true);
        match api::client(Some(token.clone())).me().await {
            Ok(user) => self.set_user(token, user),
            Err(error) => {
                tracing::warn!(%error, "session refresh failed");
                self.clear_auth();
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.peek().as_ref() {
            tracing::info!(user_id = user.id, "signed out");
        }
        self.clear_auth();
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
