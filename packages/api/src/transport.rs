//! # Transport — the seam between request building and the network
//!
//! [`ApiClient`](crate::ApiClient) turns a call into a fully described
//! [`ApiRequest`] (URL, headers, body) and hands it to a [`Transport`]. The
//! production transport is [`ReqwestTransport`]; tests substitute a recording
//! fake so every outgoing request can be inspected without a network.

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::form::MultipartForm;

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    /// Already serialised JSON.
    Json(String),
    Form(MultipartForm),
}

/// An outgoing request, complete except for transport-owned headers.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of a response.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Async trait for delivering requests.
pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, ApiError>>;
}

/// Transport over a shared `reqwest::Client`.
///
/// No timeout is configured; the platform default applies.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.client.request(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(json) => builder.body(json),
            // reqwest (or the browser) writes the multipart boundary header.
            RequestBody::Form(form) => builder.multipart(form.into_reqwest()?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}
