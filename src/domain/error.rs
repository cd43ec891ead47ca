//! Error types for record submissions.
//!
//! A submission fails either before it reaches the store (`Invalid`) or
//! inside it (`Store`). Both are returned to the caller as values.

use thiserror::Error;

/// A single field rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid input: {field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("Invalid input: {field} must contain only digits")]
    NotDigits { field: &'static str },

    #[error("Invalid input: {field} is too large")]
    OutOfRange { field: &'static str },
}

impl ValidationError {
    /// Name of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::NotDigits { field }
            | ValidationError::OutOfRange { field } => field,
        }
    }
}

/// Failure of an add operation.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Record store error: {0:#}")]
    Store(#[from] anyhow::Error),
}

impl RecordError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RecordError::Invalid(_))
    }
}
