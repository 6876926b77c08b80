//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps one file per
//! key. It stands in for the browser's `localStorage` when the client is built
//! for a native target, so a session survives restarts there too.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── access_token
//! ├── refresh_token
//! └── user                 # JSON
//! ```
//!
//! Keys are restricted to `[A-Za-z0-9_-]`; any other character is replaced by
//! `_` so a key can never escape the base directory.

use std::path::PathBuf;

use crate::session::KeyValueStore;

/// Filesystem-backed KeyValueStore for native builds.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base.join(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Cannot create store directory {:?}: {}", self.base, e);
            return;
        }
        if let Err(e) = std::fs::write(self.entry_path(key), value) {
            tracing::warn!("Cannot write store entry {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tokens;
    use crate::session::SessionStore;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("social_store_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let sessions = SessionStore::new(FileStore::new(dir.clone()));
        sessions.begin(
            &Tokens {
                access: "a".to_string(),
                refresh: "r".to_string(),
            },
            None,
        );

        // Re-open from same directory
        let reopened = SessionStore::new(FileStore::new(dir.clone()));
        assert_eq!(reopened.access_token().as_deref(), Some("a"));
        assert_eq!(reopened.refresh_token().as_deref(), Some("r"));

        reopened.clear();
        assert!(SessionStore::new(FileStore::new(dir.clone())).load().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_keys_cannot_escape_base() {
        let store = FileStore::new(PathBuf::from("/tmp/base"));
        assert_eq!(store.entry_path("../etc/passwd"), PathBuf::from("/tmp/base/___etc_passwd"));
    }
}
