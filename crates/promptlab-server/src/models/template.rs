//! Template DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use promptlab::Template;

/// Template as returned by the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TemplateResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: String,
}

impl From<Template> for TemplateResponse {
    fn from(template: Template) -> Self {
        Self {
            id: template.id,
            title: template.title,
            description: template.description,
            content: template.content,
            tags: template.tags,
            created_at: template.created_at,
        }
    }
}

/// Create template request
///
/// All fields are required; they are optional here so the handler can
/// report a 400 with the contractual error body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTemplateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}
