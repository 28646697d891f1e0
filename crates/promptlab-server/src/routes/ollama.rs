//! Ollama Proxy Routes
//!
//! Bridge between the UI and the local Ollama server. A successful
//! completion is appended to the prompt history as a side effect.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use promptlab::NewPromptHistory;

use super::{bad_request, internal_error, ApiError};
use crate::models::{ErrorResponse, GenerateRequest, GenerateResponse, StatusResponse};
use crate::AppState;

/// Check Ollama server reachability
#[utoipa::path(
    get,
    path = "/api/ollama/status",
    responses(
        (status = 200, description = "Reachability of the Ollama server", body = StatusResponse)
    ),
    tag = "Ollama"
)]
pub async fn ollama_status(State(state): State<AppState>) -> Json<StatusResponse> {
    // The client folds every failure into the status payload.
    Json(state.inference.check_status().await.into())
}

/// List available model names
#[utoipa::path(
    get,
    path = "/api/ollama/models",
    responses(
        (status = 200, description = "Model names, or the fallback list when the server is unreachable", body = Vec<String>)
    ),
    tag = "Ollama"
)]
pub async fn list_models(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.inference.list_models().await)
}

/// Generate a completion and record it in the history log
#[utoipa::path(
    post,
    path = "/api/ollama/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated completion", body = GenerateResponse),
        (status = 400, description = "Missing model or prompt", body = ErrorResponse),
        (status = 500, description = "Completion failed", body = ErrorResponse)
    ),
    tag = "Ollama"
)]
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Some(model) = payload.model.filter(|m| !m.is_empty()) else {
        return Err(bad_request("Model and prompt are required"));
    };
    let Some(prompt) = payload.prompt.filter(|p| !p.is_empty()) else {
        return Err(bad_request("Model and prompt are required"));
    };

    let completion = state
        .inference
        .generate(&model, &prompt)
        .await
        .map_err(|err| internal_error("Failed to generate completion", &err))?;

    // A failed history append is logged, not surfaced; the completion
    // is still returned.
    let record = NewPromptHistory {
        model,
        prompt,
        response: completion.response.clone(),
        metadata: Some(json!({ "processing_time": completion.processing_time })),
    };
    if let Err(err) = state.history_service.record(record).await {
        tracing::warn!("Failed to record prompt history: {err}");
    }

    Ok(Json(completion.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/ollama/status", get(ollama_status))
        .route("/api/ollama/models", get(list_models))
        .route("/api/ollama/generate", post(generate))
}
