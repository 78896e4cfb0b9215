//! # feedback-core
//!
//! Domain layer containing the feedback entity, value objects, and the repository trait.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Feedback, NewFeedback};
pub use error::DomainError;
pub use traits::{FeedbackQuery, FeedbackRepository, RepoResult};
pub use value_objects::{Rating, SortOrder, SortOrderParseError};
