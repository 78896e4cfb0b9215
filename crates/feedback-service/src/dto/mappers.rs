//! Entity to DTO mappers

use feedback_core::entities::Feedback;

use super::responses::FeedbackResponse;

impl From<Feedback> for FeedbackResponse {
    fn from(feedback: Feedback) -> Self {
        Self {
            id: feedback.id,
            message: feedback.message,
            rating: feedback.rating,
            created_at: feedback.created_at,
        }
    }
}
