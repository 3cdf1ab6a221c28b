//! Domain models with validation at construction
//!
//! Request bodies are validated when building a `NewFile`.
//! Invalid input returns ValidationError, not panic.

pub mod file;
pub mod validation;

pub use file::{FileRecord, NewFile};
pub use validation::ValidationError;
