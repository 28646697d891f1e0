//! PromptHistory - Prompt/Response Exchange Record
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// One prompt/response exchange with timing metadata. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptHistory {
    pub id: i64,
    pub model: String,
    pub prompt: String,
    pub response: String,
    /// Opaque key-value metadata (e.g. processing time in milliseconds).
    pub metadata: Option<serde_json::Value>,
    /// RFC 3339 timestamp, stamped by the store at creation time.
    pub created_at: String,
}

/// Fields for creating a PromptHistory record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPromptHistory {
    pub model: String,
    pub prompt: String,
    pub response: String,
    pub metadata: Option<serde_json::Value>,
}
