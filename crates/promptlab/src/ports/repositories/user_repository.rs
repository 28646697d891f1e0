//! User Repository Port
//!
//! Abstract interface for User persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewUser, User};

/// Repository interface for User records
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Find the first user with the given username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Create a user, assigning the next sequential id.
    ///
    /// Fails with [`DomainError::Conflict`] when the username is taken.
    async fn create(&self, new_user: NewUser) -> Result<User, DomainError>;
}
