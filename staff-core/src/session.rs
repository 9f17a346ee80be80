//! SessionGate - demo login state
//!
//! Two states, Unauthenticated and Authenticated(user). Login performs no
//! credential check; anyone who submits the form gets in.

use shared::AuthState;

use crate::sync::DurableSync;

/// Username used when the login form is submitted blank
pub const DEFAULT_USER: &str = "Admin";

pub struct SessionGate {
    state: AuthState,
    sync: DurableSync,
}

impl SessionGate {
    /// Restore the gate from the auth slot
    ///
    /// Absent or malformed snapshots start Unauthenticated, as does one that
    /// claims a session without naming a user.
    pub fn restore(sync: DurableSync) -> Self {
        let state = match sync.load_auth() {
            Some(state) if state.is_authenticated => match state.user.as_deref() {
                Some(user) if !user.is_empty() => AuthState::authenticated(user),
                _ => {
                    tracing::warn!("Auth snapshot has no user, starting signed out");
                    AuthState::unauthenticated()
                }
            },
            _ => AuthState::unauthenticated(),
        };

        if let Some(user) = state.user() {
            tracing::info!(user = %user, "Session restored");
        }
        Self { state, sync }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn user(&self) -> Option<&str> {
        self.state.user()
    }

    /// Demo login: accepts any username, blank becomes [`DEFAULT_USER`]
    pub fn login(&mut self, username: &str) -> AuthState {
        let user = if username.trim().is_empty() {
            DEFAULT_USER
        } else {
            username
        };

        self.state = AuthState::authenticated(user);
        if let Err(e) = self.sync.save_auth(&self.state) {
            tracing::warn!(error = %e, "Failed to persist auth snapshot");
        }

        tracing::info!(user = %user, "Signed in");
        self.state.clone()
    }

    /// Sign out and erase the auth slot; the roster is left alone
    pub fn logout(&mut self) -> AuthState {
        let previous = self.state.user.take();
        self.state = AuthState::unauthenticated();
        if let Err(e) = self.sync.clear_auth() {
            tracing::warn!(error = %e, "Failed to clear auth snapshot");
        }

        tracing::info!(user = ?previous, "Signed out");
        self.state.clone()
    }
}
