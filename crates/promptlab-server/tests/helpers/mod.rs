//! Integration test helpers: drive the real router in-process and
//! stand up stub Ollama servers on ephemeral ports.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header, Method, Request, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tower::ServiceExt;

use promptlab_server::adapters::MemoryStore;
use promptlab_server::services::OllamaClient;
use promptlab_server::{app, AppState};

/// Response text every healthy stub completion returns.
/// Note: Used by the Ollama proxy tests, but not all test files use it.
#[allow(dead_code)]
pub const STUB_COMPLETION: &str = "Prompt engineering is the art of asking well.";

/// Error message the failing stub reports for completions.
#[allow(dead_code)]
pub const STUB_GENERATE_ERROR: &str = "model 'missing:latest' not found";

/// Build the application with a seeded store and an Ollama client
/// pointed at `ollama_base`.
pub fn test_app(ollama_base: &str, demo_fallback: bool) -> Router {
    let store = Arc::new(MemoryStore::with_default_templates());
    let client = OllamaClient::new(ollama_base, demo_fallback);
    app(AppState::new(store, Arc::new(client)))
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub listener addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });
    format!("http://{addr}")
}

/// Stub Ollama server that reports two models and answers every
/// completion with [`STUB_COMPLETION`]. Returns its base URL.
pub async fn spawn_stub_ollama() -> String {
    let router = Router::new()
        .route(
            "/api/tags",
            get(|| async {
                Json(json!({
                    "models": [
                        { "name": "llama2:7b" },
                        { "name": "tinyllama:1.1b" }
                    ]
                }))
            }),
        )
        .route(
            "/api/generate",
            post(|| async { Json(json!({ "response": STUB_COMPLETION, "done": true })) }),
        );
    spawn(router).await
}

/// Stub Ollama server that fails every request with a 500 and an
/// explicit error payload. Returns its base URL.
/// Note: Used by the Ollama proxy tests, but not all test files use it.
#[allow(dead_code)]
pub async fn spawn_failing_ollama() -> String {
    let router = Router::new()
        .route(
            "/api/tags",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "tags unavailable" })),
                )
            }),
        )
        .route(
            "/api/generate",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": STUB_GENERATE_ERROR })),
                )
            }),
        );
    spawn(router).await
}

/// A base URL nothing listens on: bind an ephemeral port, then drop
/// the listener so connections are refused.
/// Note: Used by the Ollama proxy tests, but not all test files use it.
#[allow(dead_code)]
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe listener addr");
    drop(listener);
    format!("http://{addr}")
}

/// Helper to build and execute HTTP requests against the router
pub struct TestRequest {
    method: Method,
    uri: String,
    body: Option<String>,
}

impl TestRequest {
    pub fn get(uri: &str) -> Self {
        Self {
            method: Method::GET,
            uri: uri.to_owned(),
            body: None,
        }
    }

    pub fn post(uri: &str) -> Self {
        Self {
            method: Method::POST,
            uri: uri.to_owned(),
            body: None,
        }
    }

    /// Attach a JSON body
    pub fn json<T: Serialize>(mut self, data: &T) -> Self {
        self.body = Some(serde_json::to_string(data).expect("serialize request body"));
        self
    }

    /// Execute the request against a clone of the router
    pub async fn send(self, app: &Router) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(self.uri);
        if self.body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }

        let request = builder
            .body(Body::from(self.body.unwrap_or_default()))
            .expect("build request");

        let response = app
            .clone()
            .oneshot(request)
            .await
            .expect("execute request");

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read response body");

        TestResponse { status, body }
    }
}

/// Captured response: status plus buffered body
pub struct TestResponse {
    pub status: StatusCode,
    body: Bytes,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("parse response body as JSON")
    }
}
