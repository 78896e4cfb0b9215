//! Axum extractors for request handling
//!
//! Custom extractors for list filters and validated JSON bodies.

mod feedback_filter;
mod validated;

pub use feedback_filter::{FeedbackFilter, FeedbackFilterParams};
pub use validated::ValidatedJson;
