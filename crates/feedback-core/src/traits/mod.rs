//! Repository traits (ports)

mod repositories;

pub use repositories::{FeedbackQuery, FeedbackRepository, RepoResult};
