//! PromptLab Domain Library
//!
//! Core domain types and interfaces for the PromptLab prompt playground.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (User, Template, PromptHistory)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use promptlab::domain::{Template, PromptHistory};
//! use promptlab::ports::{TemplateRepository, InferenceProvider};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    DomainError, NewPromptHistory, NewTemplate, NewUser, PromptHistory, Template, User,
};
pub use ports::{
    Completion,
    HistoryRepository,
    // Services
    InferenceProvider,
    ServerStatus,
    TemplateRepository,
    // Repositories
    UserRepository,
};
