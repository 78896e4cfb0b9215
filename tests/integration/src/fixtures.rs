//! Test fixtures and data generators
//!
//! Request and response shapes as a client sees them on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body for POST /feedback
#[derive(Debug, Serialize)]
pub struct SubmitFeedback {
    pub message: String,
    pub rating: i64,
}

impl SubmitFeedback {
    pub fn new(message: impl Into<String>, rating: i64) -> Self {
        Self {
            message: message.into(),
            rating,
        }
    }
}

/// A feedback record returned by GET /feedback
#[derive(Debug, Deserialize)]
pub struct FeedbackRecord {
    pub id: i64,
    pub message: String,
    pub rating: i64,
    pub created_at: Option<DateTime<Utc>>,
}

/// Body returned by a successful POST /feedback
#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: String,
}

/// Error body returned for every failure
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
