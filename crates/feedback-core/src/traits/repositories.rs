//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Feedback, NewFeedback};
use crate::error::DomainError;
use crate::value_objects::SortOrder;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Filter and ordering for listing feedback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedbackQuery {
    /// Only return records with exactly this rating
    pub rating: Option<i64>,
    /// Ordering by `created_at` (ties broken by `id`)
    pub sort: SortOrder,
}

impl FeedbackQuery {
    pub fn new(rating: Option<i64>, sort: SortOrder) -> Self {
        Self { rating, sort }
    }

    /// Query with a rating filter and the default order
    pub fn with_rating(rating: i64) -> Self {
        Self {
            rating: Some(rating),
            ..Default::default()
        }
    }
}

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Ensure the backing table exists (idempotent)
    async fn ensure_schema(&self) -> RepoResult<()>;

    /// List feedback matching the query
    async fn list(&self, query: FeedbackQuery) -> RepoResult<Vec<Feedback>>;

    /// Insert one record, returning it with its assigned id and timestamp
    async fn create(&self, feedback: &NewFeedback) -> RepoResult<Feedback>;

    /// Insert many records atomically, returning how many were written
    async fn create_many(&self, feedback: &[NewFeedback]) -> RepoResult<u64>;

    /// Total number of stored records
    async fn count(&self) -> RepoResult<i64>;
}
