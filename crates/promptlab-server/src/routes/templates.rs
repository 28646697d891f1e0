//! Template Library Routes
//!
//! HTTP handlers that delegate to TemplateService for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use promptlab::NewTemplate;

use super::{bad_request, internal_error, not_found, ApiError};
use crate::models::{CreateTemplateRequest, ErrorResponse, TemplateResponse};
use crate::AppState;

/// List all templates
#[utoipa::path(
    get,
    path = "/api/templates",
    responses(
        (status = 200, description = "All templates in insertion order", body = Vec<TemplateResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Templates"
)]
pub async fn list_templates(
    State(state): State<AppState>,
) -> Result<Json<Vec<TemplateResponse>>, ApiError> {
    let templates = state
        .template_service
        .list_all()
        .await
        .map_err(|err| internal_error("Failed to fetch templates", &err))?;

    Ok(Json(templates.into_iter().map(Into::into).collect()))
}

/// Get a template by ID
#[utoipa::path(
    get,
    path = "/api/templates/{id}",
    params(("id" = i64, Path, description = "Template ID")),
    responses(
        (status = 200, description = "Template found", body = TemplateResponse),
        (status = 404, description = "Template not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Templates"
)]
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TemplateResponse>, ApiError> {
    let template = state
        .template_service
        .get_by_id(id)
        .await
        .map_err(|err| internal_error("Failed to fetch template", &err))?
        .ok_or_else(|| not_found("Template not found"))?;

    Ok(Json(template.into()))
}

/// Create a new template
#[utoipa::path(
    post,
    path = "/api/templates",
    request_body = CreateTemplateRequest,
    responses(
        (status = 201, description = "Template created", body = TemplateResponse),
        (status = 400, description = "Missing field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Templates"
)]
pub async fn create_template(
    State(state): State<AppState>,
    Json(payload): Json<CreateTemplateRequest>,
) -> Result<(StatusCode, Json<TemplateResponse>), ApiError> {
    let (Some(title), Some(description), Some(content), Some(tags)) = (
        payload.title.filter(|t| !t.is_empty()),
        payload.description.filter(|d| !d.is_empty()),
        payload.content.filter(|c| !c.is_empty()),
        payload.tags,
    ) else {
        return Err(bad_request("All fields are required"));
    };

    let template = state
        .template_service
        .create(NewTemplate {
            title,
            description,
            content,
            tags,
        })
        .await
        .map_err(|err| internal_error("Failed to create template", &err))?;

    Ok((StatusCode::CREATED, Json(template.into())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/templates", get(list_templates).post(create_template))
        .route("/api/templates/:id", get(get_template))
}
