//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic business failures live here (a required field left
/// empty, an edit that would break an invariant of the draft). Print and IO
/// failures belong to the boundary that performs them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// User-supplied data failed validation. The message is meant to be shown
    /// to the person filling in the form as-is.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An edit would break an invariant of the state it targets.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// The bare human-readable message, without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation(msg) | DomainError::InvariantViolation(msg) => msg,
        }
    }
}
