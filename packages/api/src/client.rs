//! # Authorizing request client
//!
//! Every call the app makes goes through [`ApiClient`]. For each request it:
//!
//! 1. joins the relative path onto the configured API base,
//! 2. attaches `Authorization: Bearer <token>` when the session store holds an
//!    access token (and nothing otherwise, e.g. during signup),
//! 3. picks the body encoding: multipart forms get **no** explicit
//!    `Content-Type` so the transport can write the boundary, everything else
//!    is sent as `application/json`.
//!
//! Non-2xx answers become an [`ApiError`]. A 401 is an ordinary failure: there
//! is no retry and no refresh-token rotation.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{ClientConfig, KeyValueStore, SessionStore};

use crate::error::ApiError;
use crate::form::MultipartForm;
use crate::transport::{ApiRequest, HttpResponse, ReqwestTransport, RequestBody, Transport};

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Request payload before encoding.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    None,
    Json(serde_json::Value),
    Form(MultipartForm),
}

/// REST client that authorizes requests from the session store.
#[derive(Clone, Debug)]
pub struct ApiClient<S: KeyValueStore, T: Transport = ReqwestTransport> {
    config: Arc<ClientConfig>,
    sessions: SessionStore<S>,
    transport: T,
}

impl<S: KeyValueStore> ApiClient<S, ReqwestTransport> {
    /// Client over the default reqwest transport.
    pub fn with_reqwest(config: ClientConfig, store: S) -> Self {
        Self::new(config, store, ReqwestTransport::new())
    }
}

impl<S: KeyValueStore, T: Transport> ApiClient<S, T> {
    pub fn new(config: ClientConfig, store: S, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            sessions: SessionStore::new(store),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn sessions(&self) -> &SessionStore<S> {
        &self.sessions
    }

    /// Build the outgoing request without sending it.
    pub fn prepare(&self, method: Method, path: &str, payload: Payload) -> Result<ApiRequest, ApiError> {
        let mut headers = Vec::new();
        if let Some(token) = self.sessions.access_token() {
            headers.push((AUTHORIZATION.to_string(), format!("Bearer {token}")));
        }

        let body = match payload {
            Payload::Form(form) => RequestBody::Form(form),
            Payload::None => RequestBody::Empty,
            Payload::Json(value) => RequestBody::Json(
                serde_json::to_string(&value).map_err(|e| ApiError::Encode(e.to_string()))?,
            ),
        };
        if !matches!(body, RequestBody::Form(_)) {
            headers.push((CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string()));
        }

        Ok(ApiRequest {
            method,
            url: self.config.endpoint(path),
            headers,
            body,
        })
    }

    /// Send a request and return the response if it was a 2xx.
    pub async fn send(&self, method: Method, path: &str, payload: Payload) -> Result<HttpResponse, ApiError> {
        let request = self.prepare(method, path, payload)?;
        tracing::debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            let err = ApiError::from_response(&response);
            tracing::debug!("{} {} failed: {}", response.status, path, err);
            Err(err)
        }
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(Method::GET, path, Payload::None).await?.json()
    }

    pub async fn post_json<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.send(Method::POST, path, Payload::Json(value)).await?.json()
    }

    pub async fn post_form<R: DeserializeOwned>(&self, path: &str, form: MultipartForm) -> Result<R, ApiError> {
        self.send(Method::POST, path, Payload::Form(form)).await?.json()
    }

    pub async fn patch_form<R: DeserializeOwned>(&self, path: &str, form: MultipartForm) -> Result<R, ApiError> {
        self.send(Method::PATCH, path, Payload::Form(form)).await?.json()
    }

    /// POST without a body, discarding whatever comes back.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::POST, path, Payload::None).await.map(|_| ())
    }
}
