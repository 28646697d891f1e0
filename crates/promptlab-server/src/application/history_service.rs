//! Prompt History Application Service
//!
//! Orchestrates domain operations for the prompt history log.

use std::sync::Arc;

use promptlab::{DomainError, HistoryRepository, NewPromptHistory, PromptHistory};

/// Application service for PromptHistory operations
pub struct HistoryService<R: HistoryRepository> {
    repo: Arc<R>,
}

impl<R: HistoryRepository> HistoryService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all history entries in insertion order
    pub async fn list_all(&self) -> Result<Vec<PromptHistory>, DomainError> {
        self.repo.find_all().await
    }

    /// Get a history entry by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<PromptHistory>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Append a prompt/response exchange to the log
    pub async fn record(&self, new_entry: NewPromptHistory) -> Result<PromptHistory, DomainError> {
        let saved = self.repo.create(new_entry).await?;

        tracing::debug!("Recorded prompt history entry {}", saved.id);

        Ok(saved)
    }
}
