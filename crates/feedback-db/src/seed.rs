//! Sample feedback used to populate a fresh database
//!
//! Seeding is not idempotent: every run appends the full sample set again.

use feedback_core::entities::NewFeedback;
use feedback_core::traits::{FeedbackRepository, RepoResult};
use tracing::info;

/// Fixed (message, rating) pairs inserted by the seed utility
pub const SAMPLE_FEEDBACK: [(&str, i64); 10] = [
    ("Great service! Very helpful staff.", 5),
    ("The product quality is excellent.", 5),
    ("Good experience overall.", 4),
    ("Could be better, but not bad.", 3),
    ("Disappointed with the service.", 2),
    ("Terrible experience, would not recommend.", 1),
    ("Fast delivery and good communication.", 4),
    ("The website is easy to use.", 5),
    ("Average experience, nothing special.", 3),
    ("Outstanding customer support!", 5),
];

/// Sample data as insertable feedback
pub fn sample_feedback() -> RepoResult<Vec<NewFeedback>> {
    SAMPLE_FEEDBACK
        .iter()
        .map(|&(message, rating)| NewFeedback::new(message, rating))
        .collect()
}

/// Ensure the schema exists, then insert every sample row in one transaction
pub async fn seed_sample_feedback(repo: &dyn FeedbackRepository) -> RepoResult<u64> {
    repo.ensure_schema().await?;

    let rows = sample_feedback()?;
    let inserted = repo.create_many(&rows).await?;

    info!(inserted, "Sample feedback inserted");
    Ok(inserted)
}
