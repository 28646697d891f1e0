//! Repository Ports
//!
//! Abstract interfaces for data persistence operations. Absence of a
//! record is an expected outcome and is signaled as `Ok(None)`, never
//! as an error.

mod history_repository;
mod template_repository;
mod user_repository;

pub use history_repository::*;
pub use template_repository::*;
pub use user_repository::*;
