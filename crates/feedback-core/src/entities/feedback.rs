//! Feedback entity - one submitted message with its rating

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Rating;

/// Stored feedback record
///
/// `id` and `created_at` are assigned by the store on insert and never change.
/// `created_at` is `None` only for rows written without a timestamp, which
/// older databases may hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub id: i64,
    pub message: String,
    pub rating: i64,
    pub created_at: Option<DateTime<Utc>>,
}

impl Feedback {
    /// First `max_chars` characters of the message, for log lines
    pub fn message_preview(&self, max_chars: usize) -> &str {
        preview(&self.message, max_chars)
    }
}

/// Feedback about to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub message: String,
    pub rating: Rating,
}

impl NewFeedback {
    /// Create new feedback, validating the rating range
    pub fn new(message: impl Into<String>, rating: i64) -> Result<Self, DomainError> {
        Ok(Self {
            message: message.into(),
            rating: Rating::new(rating)?,
        })
    }
}

fn preview(message: &str, max_chars: usize) -> &str {
    match message.char_indices().nth(max_chars) {
        Some((idx, _)) => &message[..idx],
        None => message,
    }
}
