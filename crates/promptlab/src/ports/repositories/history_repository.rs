//! Prompt History Repository Port
//!
//! Abstract interface for PromptHistory persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewPromptHistory, PromptHistory};

/// Repository interface for PromptHistory records
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Find a history entry by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<PromptHistory>, DomainError>;

    /// Find all history entries in insertion order
    async fn find_all(&self) -> Result<Vec<PromptHistory>, DomainError>;

    /// Append a history entry, assigning the next sequential id and timestamp
    async fn create(&self, new_entry: NewPromptHistory) -> Result<PromptHistory, DomainError>;
}
