//! Infrastructure Adapters
//!
//! Concrete implementations of the repository ports.

pub mod memory;

pub use memory::MemoryStore;
