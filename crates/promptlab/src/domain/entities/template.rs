//! Template - Reusable Prompt Pattern
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Prompt template with descriptive metadata and classification tags.
///
/// Immutable once created; there is no update or delete operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
    pub tags: Vec<String>,
    /// RFC 3339 timestamp, stamped by the store at creation time.
    pub created_at: String,
}

/// Fields for creating a Template. Id and timestamp are store-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTemplate {
    pub title: String,
    pub description: String,
    pub content: String,
    pub tags: Vec<String>,
}
