//! Prompt History Routes
//!
//! HTTP handlers that delegate to HistoryService for business logic.

use axum::{extract::State, routing::get, Json, Router};

use super::{internal_error, ApiError};
use crate::models::{ErrorResponse, HistoryResponse};
use crate::AppState;

/// List all history entries
#[utoipa::path(
    get,
    path = "/api/history",
    responses(
        (status = 200, description = "All history entries in insertion order", body = Vec<HistoryResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "History"
)]
pub async fn list_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<HistoryResponse>>, ApiError> {
    let history = state
        .history_service
        .list_all()
        .await
        .map_err(|err| internal_error("Failed to fetch prompt history", &err))?;

    Ok(Json(history.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/history", get(list_history))
}
