//! Route definitions

use axum::{routing::get, Router};

use crate::handlers::{feedback, health};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().merge(feedback_routes()).merge(health_routes())
}

/// Feedback routes
fn feedback_routes() -> Router<AppState> {
    Router::new().route(
        "/feedback",
        get(feedback::list_feedback).post(feedback::create_feedback),
    )
}

/// Health check routes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
