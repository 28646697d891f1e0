//! Integration tests for the Ollama proxy endpoints
//!
//! A stub inference server (or a deliberately unreachable address)
//! stands in for Ollama; the real router and client run in-process.

mod helpers;

use axum::http::StatusCode;
use serde_json::{json, Value};

use helpers::{
    spawn_failing_ollama, spawn_stub_ollama, test_app, unreachable_base_url, TestRequest,
    STUB_COMPLETION, STUB_GENERATE_ERROR,
};

#[tokio::test]
async fn status_reports_connected_against_stub() {
    let app = test_app(&spawn_stub_ollama().await, false);

    let response = TestRequest::get("/api/ollama/status").send(&app).await;

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["connected"], json!(true));
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn status_reports_disconnected_when_unreachable() {
    let app = test_app(&unreachable_base_url().await, false);

    let response = TestRequest::get("/api/ollama/status").send(&app).await;

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["connected"], json!(false));
    let message = body["message"].as_str().expect("message present");
    assert!(message.contains("Failed to connect to Ollama"));
}

#[tokio::test]
async fn status_reports_disconnected_on_error_status() {
    let app = test_app(&spawn_failing_ollama().await, false);

    let response = TestRequest::get("/api/ollama/status").send(&app).await;

    let body: Value = response.json();
    assert_eq!(body["connected"], json!(false));
    let message = body["message"].as_str().expect("message present");
    assert!(message.contains("500"));
}

#[tokio::test]
async fn models_returns_names_reported_by_server() {
    let app = test_app(&spawn_stub_ollama().await, false);

    let response = TestRequest::get("/api/ollama/models").send(&app).await;

    assert_eq!(response.status, StatusCode::OK);
    let models: Vec<String> = response.json();
    assert_eq!(models, vec!["llama2:7b", "tinyllama:1.1b"]);
}

#[tokio::test]
async fn models_falls_back_when_unreachable() {
    let app = test_app(&unreachable_base_url().await, false);

    let response = TestRequest::get("/api/ollama/models").send(&app).await;

    assert_eq!(response.status, StatusCode::OK);
    let models: Vec<String> = response.json();
    assert_eq!(models, vec!["llama2:7b", "mistral:7b", "codellama:7b"]);
}

#[tokio::test]
async fn models_falls_back_on_error_status() {
    let app = test_app(&spawn_failing_ollama().await, false);

    let models: Vec<String> = TestRequest::get("/api/ollama/models")
        .send(&app)
        .await
        .json();
    assert_eq!(models, vec!["llama2:7b", "mistral:7b", "codellama:7b"]);
}

#[tokio::test]
async fn generate_returns_completion_and_appends_history() {
    let app = test_app(&spawn_stub_ollama().await, false);

    let response = TestRequest::post("/api/ollama/generate")
        .json(&json!({ "model": "llama2:7b", "prompt": "What is prompt engineering?" }))
        .send(&app)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["response"], json!(STUB_COMPLETION));
    assert!(body["processing_time"].is_u64());

    let history: Vec<Value> = TestRequest::get("/api/history").send(&app).await.json();
    assert_eq!(history.len(), 1);
    let entry = &history[0];
    assert_eq!(entry["id"], json!(1));
    assert_eq!(entry["model"], json!("llama2:7b"));
    assert_eq!(entry["prompt"], json!("What is prompt engineering?"));
    assert_eq!(entry["response"], json!(STUB_COMPLETION));
    assert!(entry["metadata"]["processing_time"].is_u64());
    assert!(!entry["created_at"].as_str().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn generate_rejects_missing_or_blank_fields() {
    let app = test_app(&spawn_stub_ollama().await, false);

    let invalid_bodies = [
        json!({ "prompt": "hello" }),
        json!({ "model": "llama2:7b" }),
        json!({ "model": "", "prompt": "hello" }),
        json!({ "model": "llama2:7b", "prompt": "" }),
    ];

    for body in invalid_bodies {
        let response = TestRequest::post("/api/ollama/generate")
            .json(&body)
            .send(&app)
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
        let error: Value = response.json();
        assert_eq!(error["error"], json!("Model and prompt are required"));
    }

    // None of the rejected requests may touch the history log.
    let history: Vec<Value> = TestRequest::get("/api/history").send(&app).await.json();
    assert!(history.is_empty());
}

#[tokio::test]
async fn generate_simulates_response_when_unreachable_in_demo_mode() {
    let app = test_app(&unreachable_base_url().await, true);

    let response = TestRequest::post("/api/ollama/generate")
        .json(&json!({ "model": "llama2:7b", "prompt": "hello" }))
        .send(&app)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = response.json();
    let text = body["response"].as_str().expect("response text");
    assert!(text.contains("Simulated response"));
    assert!(text.contains("Ollama connection failed"));

    // From the router's perspective the completion succeeded, so a
    // history record is still written.
    let history: Vec<Value> = TestRequest::get("/api/history").send(&app).await.json();
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn generate_embeds_upstream_error_in_simulated_response() {
    let app = test_app(&spawn_failing_ollama().await, true);

    let response = TestRequest::post("/api/ollama/generate")
        .json(&json!({ "model": "missing:latest", "prompt": "hello" }))
        .send(&app)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = response.json();
    let text = body["response"].as_str().expect("response text");
    assert!(text.contains(STUB_GENERATE_ERROR));
}

#[tokio::test]
async fn generate_fails_with_500_in_production_mode() {
    let app = test_app(&unreachable_base_url().await, false);

    let response = TestRequest::post("/api/ollama/generate")
        .json(&json!({ "model": "llama2:7b", "prompt": "hello" }))
        .send(&app)
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("Failed to generate completion"));

    let history: Vec<Value> = TestRequest::get("/api/history").send(&app).await.json();
    assert!(history.is_empty());
}
