//! Feedback entity <-> model mapper

use feedback_core::entities::{Feedback, NewFeedback};
use feedback_core::SortOrder;

use crate::models::FeedbackModel;

/// Convert FeedbackModel to Feedback entity
impl From<FeedbackModel> for Feedback {
    fn from(model: FeedbackModel) -> Self {
        Feedback {
            id: model.id,
            message: model.message,
            rating: model.rating,
            created_at: model.created_at.map(|at| at.and_utc()),
        }
    }
}

/// Values bound when inserting new feedback
pub struct FeedbackInsert<'a> {
    pub message: &'a str,
    pub rating: i64,
}

impl<'a> FeedbackInsert<'a> {
    pub fn new(feedback: &'a NewFeedback) -> Self {
        Self {
            message: &feedback.message,
            rating: feedback.rating.into_inner(),
        }
    }
}

/// SQL keyword for a sort order
///
/// Only these two literals are ever written into query text.
pub fn order_keyword(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}
