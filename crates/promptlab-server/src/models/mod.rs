//! Request/Response DTOs
//!
//! Wire-level models for the HTTP API, kept separate from the domain
//! entities.

mod history;
mod ollama;
mod template;

pub use history::*;
pub use ollama::*;
pub use template::*;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
