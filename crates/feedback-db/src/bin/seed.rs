//! Seed utility entry point
//!
//! Creates the feedback table if needed and inserts the sample rows.
//! Running it twice inserts the rows twice.
//!
//! Run with:
//! ```bash
//! cargo run -p feedback-db --bin feedback-seed
//! ```

use feedback_common::{try_init_tracing, AppConfig};
use feedback_core::FeedbackRepository;
use feedback_db::{create_pool, seed_sample_feedback, DatabaseConfig, SqliteFeedbackRepository};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Seeding failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    info!(url = %config.database.url, "Seeding database");

    let pool = create_pool(&DatabaseConfig::from(&config.database)).await?;
    let repo = SqliteFeedbackRepository::new(pool.clone());

    let inserted = seed_sample_feedback(&repo).await?;
    let total = repo.count().await?;
    info!(inserted, total, "Database setup complete");

    pool.close().await;
    Ok(())
}
