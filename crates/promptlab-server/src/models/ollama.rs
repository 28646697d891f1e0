//! Ollama Proxy DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use promptlab::{Completion, ServerStatus};

/// Reachability of the Ollama server
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<ServerStatus> for StatusResponse {
    fn from(status: ServerStatus) -> Self {
        Self {
            connected: status.connected,
            message: status.message,
        }
    }
}

/// Completion request
///
/// Fields are optional so that missing keys reach the handler's own
/// validation (a contractual 400) instead of the framework rejection.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateRequest {
    pub model: Option<String>,
    pub prompt: Option<String>,
}

/// Completion response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub response: String,
    /// Wall-clock processing time in milliseconds
    pub processing_time: u64,
}

impl From<Completion> for GenerateResponse {
    fn from(completion: Completion) -> Self {
        Self {
            response: completion.response,
            processing_time: completion.processing_time,
        }
    }
}
