//! # feedback-db
//!
//! Database layer implementing the feedback repository with SQLite via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Schema initialization (`feedback` table)
//! - Row models with SQLx `FromRow` derives and entity mappers
//! - Repository implementation
//! - Sample data for the `feedback-seed` binary
//!
//! ## Usage
//!
//! ```rust,ignore
//! use feedback_common::AppConfig;
//! use feedback_db::{create_pool, DatabaseConfig, SqliteFeedbackRepository};
//! use feedback_core::{FeedbackQuery, FeedbackRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&DatabaseConfig::from(&config.database)).await?;
//!     let repo = SqliteFeedbackRepository::new(pool);
//!     repo.ensure_schema().await?;
//!     let rows = repo.list(FeedbackQuery::with_rating(5)).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;
pub mod seed;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, SqlitePool};
pub use repositories::SqliteFeedbackRepository;
pub use schema::ensure_schema;
pub use seed::{sample_feedback, seed_sample_feedback, SAMPLE_FEEDBACK};
