//! PromptLab API Server
//!
//! HTTP surface for the prompt playground: proxies completion
//! requests to a local Ollama server, serves the prompt template
//! library and the prompt history log. All state is process-memory
//! only; restarts start fresh.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod adapters;
pub mod application;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;

use adapters::MemoryStore;
use application::{HistoryService, TemplateService, UserService};
use promptlab::InferenceProvider;

/// Type aliases for application services backed by the in-memory store
pub type AppTemplateService = TemplateService<MemoryStore>;
pub type AppHistoryService = HistoryService<MemoryStore>;
pub type AppUserService = UserService<MemoryStore>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub inference: Arc<dyn InferenceProvider>,
    pub template_service: Arc<AppTemplateService>,
    pub history_service: Arc<AppHistoryService>,
    pub user_service: Arc<AppUserService>,
}

impl AppState {
    /// Wire the shared store and inference provider into the
    /// application services.
    pub fn new(store: Arc<MemoryStore>, inference: Arc<dyn InferenceProvider>) -> Self {
        Self {
            inference,
            template_service: Arc::new(TemplateService::new(store.clone())),
            history_service: Arc::new(HistoryService::new(store.clone())),
            user_service: Arc::new(UserService::new(store)),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "PromptLab API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the complete application router.
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::ollama::router())
        .merge(routes::templates::router())
        .merge(routes::history::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
