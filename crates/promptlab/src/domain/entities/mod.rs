//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - User: Account record (no authentication in this scope)
//! - Template: Reusable prompt pattern with descriptive metadata
//! - PromptHistory: Immutable record of one prompt/response exchange

mod history;
mod template;
mod user;

pub use history::*;
pub use template::*;
pub use user::*;
