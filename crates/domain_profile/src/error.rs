//! Profile domain errors

use thiserror::Error;

use crate::calculation::CalculationError;

/// Errors that can occur in the profile domain
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Recalculation rejected the resulting line history
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    /// Referenced line does not exist on this profile
    #[error("Line not found: {0}")]
    LineNotFound(String),

    /// Required field is missing
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ProfileError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        ProfileError::Validation(message.into())
    }

    /// Creates a line-not-found error
    pub fn line_not_found(line_id: impl std::fmt::Display) -> Self {
        ProfileError::LineNotFound(line_id.to_string())
    }
}
