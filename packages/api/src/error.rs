//! # Error taxonomy
//!
//! | Variant | Raised when | Shown as |
//! |---------|-------------|----------|
//! | [`ApiError::Invalid`] | client-side validation failed; no request was sent | per-field messages |
//! | [`ApiError::Rejected`] | the backend answered with per-field messages | per-field messages |
//! | [`ApiError::Status`] | any other non-2xx answer | banner (backend `error`/`detail` or a fallback) |
//! | [`ApiError::Network`] | the request never got an answer | banner fallback |
//! | [`ApiError::Encode`] / [`ApiError::Decode`] | a body could not be built or parsed | banner fallback |
//!
//! Nothing is retried. Every variant resolves to a visible message.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::transport::HttpResponse;

/// Field name under which non-field messages are kept.
pub const GENERAL: &str = "general";

/// Backend keys that carry a message for the whole form rather than a field.
const GENERAL_KEYS: [&str; 3] = ["error", "detail", "non_field_errors"];

/// Per-field error messages, one message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn general(&self) -> Option<&str> {
        self.get(GENERAL)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Read a backend error body such as `{"email": ["taken"], "error": "..."}`.
    ///
    /// Lists keep their first message. `error`, `detail` and
    /// `non_field_errors` land under [`GENERAL`].
    pub fn from_body(body: &serde_json::Value) -> Self {
        let mut errors = Self::new();
        let Some(object) = body.as_object() else {
            return errors;
        };
        for (key, value) in object {
            let Some(message) = first_message(value) else {
                continue;
            };
            let field = if GENERAL_KEYS.contains(&key.as_str()) {
                GENERAL
            } else {
                key.as_str()
            };
            errors.insert(field, message);
        }
        errors
    }

    fn has_field_messages(&self) -> bool {
        self.0.keys().any(|k| k != GENERAL)
    }
}

fn first_message(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => items.iter().find_map(first_message),
        serde_json::Value::Object(inner) => inner.values().find_map(first_message),
        _ => None,
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            if field == GENERAL {
                write!(f, "{message}")?;
            } else {
                write!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Invalid(FieldErrors),
    #[error("{0}")]
    Rejected(FieldErrors),
    #[error("server responded with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("network error: {0}")]
    Network(String),
    #[error("cannot encode request: {0}")]
    Encode(String),
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_response(response: &HttpResponse) -> Self {
        let body: serde_json::Value =
            serde_json::from_slice(&response.body).unwrap_or(serde_json::Value::Null);
        let errors = FieldErrors::from_body(&body);
        // Auth failures carry token metadata (`code`, `messages`), not form fields.
        let auth_failure = matches!(response.status, 401 | 403);
        if !auth_failure && errors.has_field_messages() && (400..500).contains(&response.status) {
            return ApiError::Rejected(errors);
        }
        ApiError::Status {
            status: response.status,
            message: errors.general().map(str::to_string),
        }
    }

    /// Per-field messages, for the variants that carry them.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Invalid(errors) | ApiError::Rejected(errors) => Some(errors),
            _ => None,
        }
    }

    /// The single banner line for this error.
    pub fn banner(&self, fallback: &str) -> String {
        let message = match self {
            ApiError::Invalid(errors) | ApiError::Rejected(errors) => errors.general(),
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        };
        message.unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}
