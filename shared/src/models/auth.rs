//! Authentication state

use serde::{Deserialize, Serialize};

/// Session authentication snapshot
///
/// Persisted as `{"isAuthenticated": bool, "user": string|null}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<String>,
}

impl AuthState {
    pub fn authenticated(user: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user.into()),
        }
    }

    pub fn unauthenticated() -> Self {
        Self::default()
    }

    /// Current session holder, only when authenticated
    pub fn user(&self) -> Option<&str> {
        if self.is_authenticated {
            self.user.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_json_shape() {
        let json = serde_json::to_string(&AuthState::authenticated("alice")).unwrap();
        assert_eq!(json, r#"{"isAuthenticated":true,"user":"alice"}"#);

        let json = serde_json::to_string(&AuthState::unauthenticated()).unwrap();
        assert_eq!(json, r#"{"isAuthenticated":false,"user":null}"#);
    }

    #[test]
    fn test_user_hidden_when_unauthenticated() {
        let state = AuthState {
            is_authenticated: false,
            user: Some("stale".to_string()),
        };
        assert_eq!(state.user(), None);
        assert_eq!(AuthState::authenticated("bob").user(), Some("bob"));
    }
}
