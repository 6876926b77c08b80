//! Recording transport for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use store::{MemoryStore, Tokens};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{ApiRequest, HttpResponse, Transport};

#[derive(Default)]
struct FakeState {
    requests: Vec<ApiRequest>,
    responses: VecDeque<Result<HttpResponse, ApiError>>,
}

/// Records every request and answers from a queue of canned responses.
/// An empty queue answers `500 {}`.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeState>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: serde_json::Value) {
        let response = HttpResponse {
            status,
            body: serde_json::to_vec(&body).unwrap(),
        };
        self.state.lock().unwrap().responses.push_back(Ok(response));
    }

    pub fn fail(&self, err: ApiError) {
        self.state.lock().unwrap().responses.push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    /// `(method, path)` pairs, with the API base stripped from the URL.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.requests()
            .iter()
            .map(|r| {
                let path = r.url.trim_start_matches("http://127.0.0.1:8000/api").to_string();
                (r.method.to_string(), path)
            })
            .collect()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        state.responses.pop_front().unwrap_or(Ok(HttpResponse {
            status: 500,
            body: b"{}".to_vec(),
        }))
    }
}

pub fn client(fake: &FakeTransport) -> ApiClient<MemoryStore, FakeTransport> {
    ApiClient::new(Default::default(), MemoryStore::new(), fake.clone())
}

pub fn signed_in_client(fake: &FakeTransport) -> ApiClient<MemoryStore, FakeTransport> {
    let api = client(fake);
    api.sessions().begin(
        &Tokens {
            access: "test-access".to_string(),
            refresh: "test-refresh".to_string(),
        },
        None,
    );
    api
}
