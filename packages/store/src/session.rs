//! # Session store — credentials and cached profile over a key-value backend
//!
//! [`SessionStore`] is the only place that knows which keys hold the client
//! session. Everything goes through the [`KeyValueStore`] trait, so the same
//! logic works against the browser's `localStorage` ([`crate::LocalStore`]), a
//! file per key on native builds ([`crate::FileStore`]) or an in-memory map in
//! tests ([`crate::MemoryStore`]).
//!
//! ## Persisted entries
//!
//! | Key | Value |
//! |-----|-------|
//! | [`ACCESS_TOKEN_KEY`] | access token, opaque string |
//! | [`REFRESH_TOKEN_KEY`] | refresh token, opaque string |
//! | [`USER_KEY`] | [`UserProfile`] serialised as JSON |
//!
//! There is no versioning: an entry that fails to parse reads as absent.
//!
//! ## Lifecycle
//!
//! Created by a successful signup or login ([`SessionStore::begin`]), read by
//! every authorized request ([`SessionStore::access_token`]), overwritten when
//! the profile changes ([`SessionStore::cache_user`]) and destroyed on logout
//! ([`SessionStore::clear`]).

use crate::models::{Tokens, UserProfile};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user";

/// Synchronous string key-value storage.
///
/// Implementations swallow backend failures: reads return `None` and writes
/// become no-ops, mirroring how the browser store behaves when unavailable.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Everything the client holds about the signed-in user.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub user: Option<UserProfile>,
}

/// Typed access to the session entries of a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn access_token(&self) -> Option<String> {
        self.store
            .get(ACCESS_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store
            .get(REFRESH_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// The cached profile, or `None` when absent or unreadable.
    pub fn cached_user(&self) -> Option<UserProfile> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Discarding unreadable cached user: {}", e);
                None
            }
        }
    }

    /// Current session, present only when an access token is stored.
    pub fn load(&self) -> Option<Session> {
        let access_token = self.access_token()?;
        Some(Session {
            access_token,
            refresh_token: self.refresh_token(),
            user: self.cached_user(),
        })
    }

    /// Store the tokens exactly as issued, plus the returned user if any.
    pub fn begin(&self, tokens: &Tokens, user: Option<&UserProfile>) {
        self.store.set(ACCESS_TOKEN_KEY, &tokens.access);
        self.store.set(REFRESH_TOKEN_KEY, &tokens.refresh);
        if let Some(user) = user {
            self.cache_user(user);
        }
    }

    /// Overwrite the cached profile in a single write.
    pub fn cache_user(&self, user: &UserProfile) {
        match serde_json::to_string(user) {
            Ok(json) => self.store.set(USER_KEY, &json),
            Err(e) => tracing::error!("Failed to serialise user profile: {}", e),
        }
    }

    pub fn clear(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(REFRESH_TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    pub fn backend(&self) -> &S {
        &self.store
    }
}
