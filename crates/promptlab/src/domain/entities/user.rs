//! User - Account Record
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// User account. Never mutated or deleted once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// Fields for creating a User. The id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
