//! Schema initialization
//!
//! The service owns a single table. `ensure_schema` is idempotent and is safe
//! to run before every operation.

use sqlx::SqlitePool;
use tracing::{debug, instrument};

/// Table name used by every feedback query
pub const FEEDBACK_TABLE: &str = "feedback";

/// DDL applied by [`ensure_schema`], in order
///
/// `created_at` keeps millisecond precision so ordering by it is meaningful
/// for rows written within the same second.
pub const SCHEMA_STATEMENTS: [&str; 2] = [
    r"
    CREATE TABLE IF NOT EXISTS feedback (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        message TEXT NOT NULL,
        rating INTEGER NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
    )
    ",
    r"
    CREATE INDEX IF NOT EXISTS idx_feedback_created_at ON feedback (created_at)
    ",
];

/// Ensure the `feedback` table and its index exist
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    debug!(table = FEEDBACK_TABLE, "Schema ensured");
    Ok(())
}
