//! Validation error types

use std::fmt;

/// Request validation failures, each mapped to a 400 response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Upsert body lacks `id`, `name` or `content`
    MissingFields,

    /// Delete request carries neither `id` nor `action=clear`
    MissingTarget,

    /// Upsert body is not parseable JSON
    InvalidJson,

    /// Delete query string could not be parsed (e.g. repeated `id`)
    InvalidQuery,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "Missing required fields"),
            Self::MissingTarget => write!(f, "Missing file ID or action"),
            Self::InvalidJson => write!(f, "Invalid JSON body"),
            Self::InvalidQuery => write!(f, "Invalid query string"),
        }
    }
}

impl std::error::Error for ValidationError {}
