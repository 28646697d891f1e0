//! Prompt History DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use promptlab::PromptHistory;

/// History entry as returned by the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    pub id: i64,
    pub model: String,
    pub prompt: String,
    pub response: String,
    pub metadata: Option<serde_json::Value>,
    pub created_at: String,
}

impl From<PromptHistory> for HistoryResponse {
    fn from(entry: PromptHistory) -> Self {
        Self {
            id: entry.id,
            model: entry.model,
            prompt: entry.prompt,
            response: entry.response,
            metadata: entry.metadata,
            created_at: entry.created_at,
        }
    }
}
