//! Repository implementations
//!
//! SQLite implementations of the repository traits defined in feedback-core.

mod error;
mod feedback;

pub use feedback::SqliteFeedbackRepository;
