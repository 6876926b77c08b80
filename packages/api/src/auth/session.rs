//! Session creation from an authentication response.

use serde::{Deserialize, Serialize};
use store::{KeyValueStore, Session, SessionStore, Tokens, UserProfile};

/// Body returned by `/signup/` and `/login/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub user: UserProfile,
    pub tokens: Tokens,
    #[serde(default)]
    pub message: Option<String>,
}

/// Persist the issued tokens and user, and return the resulting session.
pub(crate) fn start_session<S: KeyValueStore>(sessions: &SessionStore<S>, response: AuthResponse) -> Session {
    sessions.begin(&response.tokens, Some(&response.user));
    tracing::info!("Signed in as {}", response.user.email);
    Session {
        access_token: response.tokens.access,
        refresh_token: Some(response.tokens.refresh),
        user: Some(response.user),
    }
}
