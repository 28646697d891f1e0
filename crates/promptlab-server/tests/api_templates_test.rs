//! Integration tests for the template library, history log and health
//! endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::{json, Value};

use helpers::{spawn_stub_ollama, test_app, TestRequest};

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app(&spawn_stub_ollama().await, false);

    let response = TestRequest::get("/health").send(&app).await;

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn startup_lists_the_six_seeded_templates_in_order() {
    let app = test_app(&spawn_stub_ollama().await, false);

    let response = TestRequest::get("/api/templates").send(&app).await;

    assert_eq!(response.status, StatusCode::OK);
    let templates: Vec<Value> = response.json();
    assert_eq!(templates.len(), 6);

    let expected_titles = [
        "Expert Chain-of-Thought",
        "Information Extraction",
        "Comparative Analysis",
        "Code Debugging Assistant",
        "Role-Based Persona",
        "Task Decomposition",
    ];

    for (index, template) in templates.iter().enumerate() {
        assert_eq!(template["id"], json!(index as i64 + 1));
        assert_eq!(template["title"], json!(expected_titles[index]));
        assert!(!template["description"]
            .as_str()
            .unwrap_or_default()
            .is_empty());
        assert!(!template["content"].as_str().unwrap_or_default().is_empty());
        let tags = template["tags"].as_array().expect("tags array");
        assert!(!tags.is_empty());
    }
}

#[tokio::test]
async fn get_template_by_id() {
    let app = test_app(&spawn_stub_ollama().await, false);

    let response = TestRequest::get("/api/templates/3").send(&app).await;

    assert_eq!(response.status, StatusCode::OK);
    let template: Value = response.json();
    assert_eq!(template["id"], json!(3));
    assert_eq!(template["title"], json!("Comparative Analysis"));
}

#[tokio::test]
async fn unknown_template_id_is_404() {
    let app = test_app(&spawn_stub_ollama().await, false);

    let response = TestRequest::get("/api/templates/999").send(&app).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("Template not found"));
}

#[tokio::test]
async fn created_templates_get_strictly_increasing_ids() {
    let app = test_app(&spawn_stub_ollama().await, false);

    let mut ids = Vec::new();
    for n in 0..3 {
        let response = TestRequest::post("/api/templates")
            .json(&json!({
                "title": format!("Custom {n}"),
                "description": "A custom template",
                "content": "Say [THING] nicely.",
                "tags": ["Custom"],
            }))
            .send(&app)
            .await;

        assert_eq!(response.status, StatusCode::CREATED);
        let template: Value = response.json();
        ids.push(template["id"].as_i64().expect("numeric id"));
        assert!(!template["created_at"]
            .as_str()
            .unwrap_or_default()
            .is_empty());
    }

    // Six seeds occupy ids 1-6; new templates continue the sequence.
    assert_eq!(ids, vec![7, 8, 9]);

    let templates: Vec<Value> = TestRequest::get("/api/templates").send(&app).await.json();
    assert_eq!(templates.len(), 9);
    assert_eq!(templates[6]["title"], json!("Custom 0"));
}

#[tokio::test]
async fn create_template_rejects_missing_fields() {
    let app = test_app(&spawn_stub_ollama().await, false);

    let invalid_bodies = [
        json!({ "description": "d", "content": "c", "tags": ["t"] }),
        json!({ "title": "t", "content": "c", "tags": ["t"] }),
        json!({ "title": "t", "description": "d", "tags": ["t"] }),
        json!({ "title": "t", "description": "d", "content": "c" }),
        json!({ "title": "", "description": "d", "content": "c", "tags": ["t"] }),
    ];

    for body in invalid_bodies {
        let response = TestRequest::post("/api/templates")
            .json(&body)
            .send(&app)
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
        let error: Value = response.json();
        assert_eq!(error["error"], json!("All fields are required"));
    }

    let templates: Vec<Value> = TestRequest::get("/api/templates").send(&app).await.json();
    assert_eq!(templates.len(), 6);
}

#[tokio::test]
async fn history_starts_empty() {
    let app = test_app(&spawn_stub_ollama().await, false);

    let response = TestRequest::get("/api/history").send(&app).await;

    assert_eq!(response.status, StatusCode::OK);
    let history: Vec<Value> = response.json();
    assert!(history.is_empty());
}
