//! Feedback database model

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database model for the feedback table
///
/// SQLite stores `created_at` as UTC text without an offset. Tables created
/// before this schema declare the column nullable.
#[derive(Debug, Clone, FromRow)]
pub struct FeedbackModel {
    pub id: i64,
    pub message: String,
    pub rating: i64,
    pub created_at: Option<NaiveDateTime>,
}
