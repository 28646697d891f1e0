//! User Application Service
//!
//! Orchestrates domain operations for user accounts. No password
//! hashing or sessions here; authentication is out of scope.

use std::sync::Arc;

use promptlab::{DomainError, NewUser, User, UserRepository};

/// Application service for User operations
pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get a user by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Get a user by username
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.repo.find_by_username(username).await
    }

    /// Register a new user. Usernames are unique; a duplicate is a
    /// [`DomainError::Conflict`].
    pub async fn register(&self, new_user: NewUser) -> Result<User, DomainError> {
        let saved = self.repo.create(new_user).await?;

        tracing::info!("Registered user: {} ({})", saved.username, saved.id);

        Ok(saved)
    }
}
