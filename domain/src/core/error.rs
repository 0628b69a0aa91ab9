//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid description: {0}")]
    InvalidDescription(String),

    #[error("Song limit must be between {min} and {max}, got {got}")]
    InvalidLimit { min: usize, max: usize, got: usize },
}

impl DomainError {
    /// Check if this error came from an unparseable language-model answer
    pub fn is_malformed(&self) -> bool {
        matches!(self, DomainError::MalformedResponse(_))
    }
}
