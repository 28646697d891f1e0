//! Inference Provider Port
//!
//! Abstract interface for a generative-model server. Implementations
//! bridge to a concrete backend (Ollama in this repository) and can be
//! swapped for fakes in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Reachability of the inference server.
///
/// All transport failures are folded into `connected: false` plus a
/// human-readable message; checking status never fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerStatus {
    pub connected: bool,
    pub message: Option<String>,
}

impl ServerStatus {
    pub fn connected() -> Self {
        Self {
            connected: true,
            message: None,
        }
    }

    pub fn disconnected(message: impl Into<String>) -> Self {
        Self {
            connected: false,
            message: Some(message.into()),
        }
    }
}

/// A single non-streaming completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    /// Generated text
    pub response: String,
    /// Wall-clock duration from request start to parse completion, in ms
    pub processing_time: u64,
}

/// Inference provider interface
///
/// # Example
///
/// ```rust,ignore
/// use promptlab::ports::InferenceProvider;
///
/// struct OllamaClient { /* ... */ }
///
/// #[async_trait]
/// impl InferenceProvider for OllamaClient {
///     async fn generate(&self, model: &str, prompt: &str)
///         -> Result<Completion, DomainError> {
///         // POST {base}/api/generate
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Lightweight reachability probe. Never fails; failures are
    /// captured in the returned status.
    async fn check_status(&self) -> ServerStatus;

    /// List available model names in the order the server reports
    /// them. Implementations return a fixed fallback list on failure
    /// so callers always have selectable options.
    async fn list_models(&self) -> Vec<String>;

    /// Generate a non-streaming completion for the given model and
    /// prompt.
    async fn generate(&self, model: &str, prompt: &str) -> Result<Completion, DomainError>;
}
