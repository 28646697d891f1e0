//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CreateTemplateRequest, ErrorResponse, GenerateRequest, GenerateResponse, HistoryResponse,
    StatusResponse, TemplateResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Ollama endpoints
        super::ollama::ollama_status,
        super::ollama::list_models,
        super::ollama::generate,
        // Template endpoints
        super::templates::list_templates,
        super::templates::get_template,
        super::templates::create_template,
        // History endpoints
        super::history::list_history,
    ),
    components(schemas(
        StatusResponse,
        GenerateRequest,
        GenerateResponse,
        TemplateResponse,
        CreateTemplateRequest,
        HistoryResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Ollama", description = "Inference server proxy"),
        (name = "Templates", description = "Prompt template library"),
        (name = "History", description = "Prompt/response history log")
    ),
    info(
        title = "PromptLab API",
        description = "Prompt playground backed by a local Ollama server"
    )
)]
pub struct ApiDoc;
