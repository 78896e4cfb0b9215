//! Application error types
//!
//! Startup failures and the JSON error body shared by every endpoint.

use serde::Serialize;

/// Errors raised while bringing the application up or serving it
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error response body
///
/// `error` carries a human readable message; for server errors it is opaque.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Message shown to clients in place of server-side error detail
    pub const OPAQUE_MESSAGE: &'static str = "Internal server error";

    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            details: None,
        }
    }

    /// Response for a 5xx error, with the cause left out
    pub fn opaque(code: impl Into<String>) -> Self {
        Self::new(code, Self::OPAQUE_MESSAGE)
    }

    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
