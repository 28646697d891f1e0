//! Template Repository Port
//!
//! Abstract interface for Template persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewTemplate, Template};

/// Repository interface for Template records
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Find a template by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Template>, DomainError>;

    /// Find all templates in insertion order
    async fn find_all(&self) -> Result<Vec<Template>, DomainError>;

    /// Create a template, assigning the next sequential id and timestamp
    async fn create(&self, new_template: NewTemplate) -> Result<Template, DomainError>;
}
