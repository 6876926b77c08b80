//! # Client configuration — `social.toml`
//!
//! Where the backend lives. The `web` binary embeds `social.toml` at build
//! time; a missing or empty section falls back to the local development
//! backend.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:8000/api/"
//!
//! [media]
//! origin = "http://127.0.0.1:8000"   # prefix for root-relative image paths
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `social.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub media: MediaConfig,
}

/// REST endpoint configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Prefix every relative request path is joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Media URL configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Origin prepended to root-relative media paths such as `/media/x.png`.
    #[serde(default = "default_media_origin")]
    pub origin: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api/".to_string()
}

fn default_media_origin() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            origin: default_media_origin(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given API base and media origin.
    pub fn new(base_url: impl Into<String>, media_origin: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            media: MediaConfig {
                origin: media_origin.into(),
            },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "social.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Join a request path onto the API base, tolerating slashes on either side.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a media path absolute. Absolute URLs pass through untouched.
    pub fn media_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.media.origin.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api/");
    }

    #[test]
    fn test_partial_toml() {
        let config = ClientConfig::from_toml("[api]\nbase_url = \"https://social.test/api\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://social.test/api");
        assert_eq!(config.media.origin, "http://127.0.0.1:8000");

        let back = ClientConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_endpoint_join() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint("/posts/"), "http://127.0.0.1:8000/api/posts/");
        assert_eq!(config.endpoint("posts/4/like/"), "http://127.0.0.1:8000/api/posts/4/like/");
    }

    #[test]
    fn test_media_url_normalisation() {
        let config = ClientConfig::new("https://x/api/", "https://x/");
        assert_eq!(config.media_url("/media/a.png"), "https://x/media/a.png");
        assert_eq!(config.media_url("https://cdn/a.png"), "https://cdn/a.png");
        assert_eq!(config.media_url("http://cdn/a.png"), "http://cdn/a.png");
    }
}
