//! Feedback service
//!
//! Lists and records feedback. The storage initializer runs before every
//! operation so a fresh database works without a separate setup step.

use feedback_core::entities::NewFeedback;
use feedback_core::traits::FeedbackQuery;
use tracing::{info, instrument};

use crate::dto::{CreateFeedbackRequest, FeedbackResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Characters of a message included in log lines
const LOG_PREVIEW_CHARS: usize = 50;

/// Feedback service
pub struct FeedbackService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedbackService<'a> {
    /// Create a new FeedbackService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List feedback matching the filter, ordered by creation time
    #[instrument(skip(self))]
    pub async fn list_feedback(&self, query: FeedbackQuery) -> ServiceResult<Vec<FeedbackResponse>> {
        let repo = self.ctx.feedback_repo();
        repo.ensure_schema().await?;

        if let Some(rating) = query.rating {
            info!(rating, "Filtering by rating");
        }

        let feedback = repo.list(query).await?;
        info!(count = feedback.len(), sort = %query.sort, "Found feedback entries");

        Ok(feedback.into_iter().map(FeedbackResponse::from).collect())
    }

    /// Record one piece of feedback
    #[instrument(skip(self, request), fields(rating = request.rating))]
    pub async fn create_feedback(
        &self,
        request: CreateFeedbackRequest,
    ) -> ServiceResult<FeedbackResponse> {
        let new_feedback = NewFeedback::new(request.message, request.rating)?;

        let repo = self.ctx.feedback_repo();
        repo.ensure_schema().await?;

        let feedback = repo.create(&new_feedback).await?;

        info!(
            id = feedback.id,
            rating = feedback.rating,
            preview = feedback.message_preview(LOG_PREVIEW_CHARS),
            "Feedback saved"
        );

        Ok(FeedbackResponse::from(feedback))
    }
}
