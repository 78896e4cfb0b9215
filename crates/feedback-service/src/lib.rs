//! # feedback-service
//!
//! Application layer containing the feedback use cases and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CreateFeedbackRequest, FeedbackResponse, HealthChecks, HealthResponse, ReadinessResponse,
    StatusResponse,
};
pub use services::{
    FeedbackService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
