//! Template Application Service
//!
//! Orchestrates domain operations for the prompt template library.

use std::sync::Arc;

use promptlab::{DomainError, NewTemplate, Template, TemplateRepository};

/// Application service for Template operations
pub struct TemplateService<R: TemplateRepository> {
    repo: Arc<R>,
}

impl<R: TemplateRepository> TemplateService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all templates in insertion order
    pub async fn list_all(&self) -> Result<Vec<Template>, DomainError> {
        self.repo.find_all().await
    }

    /// Get a template by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Template>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Create a new template
    pub async fn create(&self, new_template: NewTemplate) -> Result<Template, DomainError> {
        let saved = self.repo.create(new_template).await?;

        tracing::info!("Created template: {} ({})", saved.title, saved.id);

        Ok(saved)
    }
}
