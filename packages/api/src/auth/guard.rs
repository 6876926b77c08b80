//! # Session guard for protected views
//!
//! Two states, [`AuthState::Unauthenticated`] and [`AuthState::Authenticated`].
//! The only way in is a signup or login writing a token; the only way out is
//! logout clearing it. Token validity is never checked here: an expired token
//! still grants access and the first failing request reveals it.

use store::{KeyValueStore, Session, SessionStore};

/// Route a denied visitor is sent to.
pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated(Session),
}

impl AuthState {
    pub fn from_store<S: KeyValueStore>(sessions: &SessionStore<S>) -> Self {
        match sessions.load() {
            Some(session) => AuthState::Authenticated(session),
            None => AuthState::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}

/// What a protected view should do on entry.
#[derive(Clone, Debug, PartialEq)]
pub enum Access {
    /// Render the view for this session.
    Granted(Session),
    /// Navigate here and render nothing else this pass.
    Redirect(&'static str),
}

pub struct SessionGuard;

impl SessionGuard {
    /// Decide access to a protected view from the stored token alone.
    pub fn enter<S: KeyValueStore>(sessions: &SessionStore<S>) -> Access {
        match AuthState::from_store(sessions) {
            AuthState::Authenticated(session) => Access::Granted(session),
            AuthState::Unauthenticated => {
                tracing::info!("No session, redirecting to {}", LOGIN_PATH);
                Access::Redirect(LOGIN_PATH)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStore, Tokens};

    #[test]
    fn test_missing_token_redirects() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert_eq!(SessionGuard::enter(&sessions), Access::Redirect("/login"));
        assert_eq!(AuthState::from_store(&sessions), AuthState::Unauthenticated);
    }

    #[test]
    fn test_cached_user_without_token_still_redirects() {
        let store = MemoryStore::new();
        store.set(store::session::USER_KEY, r#"{"email":"a@b.c","full_name":"A"}"#);
        let sessions = SessionStore::new(store);
        assert_eq!(SessionGuard::enter(&sessions), Access::Redirect(LOGIN_PATH));
    }

    #[test]
    fn test_token_grants_access() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.begin(
            &Tokens {
                access: "expired-but-present".to_string(),
                refresh: "r".to_string(),
            },
            None,
        );

        match SessionGuard::enter(&sessions) {
            Access::Granted(session) => {
                assert_eq!(session.access_token, "expired-but-present");
                assert!(session.user.is_none());
            }
            other => panic!("expected access, got {other:?}"),
        }
        assert!(AuthState::from_store(&sessions).is_authenticated());
    }

    #[test]
    fn test_logout_returns_to_unauthenticated() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.begin(
            &Tokens {
                access: "a".to_string(),
                refresh: "r".to_string(),
            },
            None,
        );
        sessions.clear();
        assert_eq!(SessionGuard::enter(&sessions), Access::Redirect(LOGIN_PATH));
    }
}
