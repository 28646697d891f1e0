//! PromptLab API Routes
//!
//! - /api/ollama/status - Inference server reachability
//! - /api/ollama/models - Available model names
//! - /api/ollama/generate - Completion proxy (records history)
//! - /api/templates - Prompt template library
//! - /api/history - Prompt/response history log

pub mod history;
pub mod ollama;
pub mod swagger;
pub mod templates;

use axum::{http::StatusCode, Json};

use crate::models::ErrorResponse;

/// Error shape shared by all handlers: a status code plus the
/// contractual `{"error": ...}` body.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn bad_request(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

pub(crate) fn not_found(message: &str) -> ApiError {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new(message)))
}

/// Last line of defense: log the real failure, return a generic 500
/// without leaking internals to the caller.
pub(crate) fn internal_error(message: &str, err: &promptlab::DomainError) -> ApiError {
    tracing::error!("{message}: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(message)),
    )
}
