//! Feedback handlers
//!
//! Endpoints for listing and submitting feedback.

use axum::{extract::State, Json};
use feedback_service::{CreateFeedbackRequest, FeedbackResponse, FeedbackService, StatusResponse};
use tracing::info;

use crate::extractors::{FeedbackFilter, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List feedback
///
/// GET /feedback?rating={rating}&sort={asc|desc}
pub async fn list_feedback(
    State(state): State<AppState>,
    FeedbackFilter(query): FeedbackFilter,
) -> ApiResult<Json<Vec<FeedbackResponse>>> {
    info!("GET /feedback - Fetching feedback");

    let service = FeedbackService::new(state.service_context());
    let feedback = service.list_feedback(query).await?;
    Ok(Json(feedback))
}

/// Submit feedback
///
/// POST /feedback
pub async fn create_feedback(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateFeedbackRequest>,
) -> ApiResult<Json<StatusResponse>> {
    info!("POST /feedback - Submitting new feedback");

    let service = FeedbackService::new(state.service_context());
    service.create_feedback(request).await?;
    Ok(Json(StatusResponse::ok()))
}
