//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Rating;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Rating must be between {min} and {max}, got {0}", min = Rating::MIN, max = Rating::MAX)]
    InvalidRating(i64),

    /// Storage failure, wrapped so the domain stays free of driver types
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRating(_) => "INVALID_RATING",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidRating(_))
    }
}
