//! # localStorage key-value store — browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. Values
//! are written as raw strings through [`gloo_storage::LocalStorage::raw`], so
//! the three session entries are plain strings under their well-known keys and
//! not JSON-quoted.
//!
//! ## Error handling
//!
//! A missing or disabled `localStorage` (private browsing, quota exceeded)
//! degrades to "no value" on reads and a logged no-op on writes.

use gloo_storage::{LocalStorage, Storage};

use crate::session::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if LocalStorage::raw().set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected write to {}", key);
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}
