//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Submit feedback request
///
/// Both fields are required; a missing field fails deserialization.
/// The message may be empty.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeedbackRequest {
    pub message: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i64,
}
