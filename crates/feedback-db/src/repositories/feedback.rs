//! SQLite implementation of FeedbackRepository

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, instrument};

use feedback_core::entities::{Feedback, NewFeedback};
use feedback_core::traits::{FeedbackQuery, FeedbackRepository, RepoResult};

use crate::mappers::{order_keyword, FeedbackInsert};
use crate::models::FeedbackModel;
use crate::schema::ensure_schema;

use super::error::map_db_error;

/// SQLite implementation of FeedbackRepository
#[derive(Clone)]
pub struct SqliteFeedbackRepository {
    pool: SqlitePool,
}

impl SqliteFeedbackRepository {
    /// Create a new SqliteFeedbackRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Build the list query; the rating is always a bound parameter
fn list_query(query: FeedbackQuery) -> QueryBuilder<'static, Sqlite> {
    let mut builder =
        QueryBuilder::<Sqlite>::new("SELECT id, message, rating, created_at FROM feedback");

    if let Some(rating) = query.rating {
        builder.push(" WHERE rating = ").push_bind(rating);
    }

    let direction = order_keyword(query.sort);
    builder
        .push(" ORDER BY created_at ")
        .push(direction)
        .push(", id ")
        .push(direction);

    builder
}

#[async_trait]
impl FeedbackRepository for SqliteFeedbackRepository {
    #[instrument(skip(self))]
    async fn ensure_schema(&self) -> RepoResult<()> {
        ensure_schema(&self.pool).await.map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn list(&self, query: FeedbackQuery) -> RepoResult<Vec<Feedback>> {
        let mut builder = list_query(query);
        debug!(sql = builder.sql(), "Listing feedback");

        let results = builder
            .build_query_as::<FeedbackModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Feedback::from).collect())
    }

    #[instrument(skip(self, feedback), fields(rating = %feedback.rating))]
    async fn create(&self, feedback: &NewFeedback) -> RepoResult<Feedback> {
        let insert = FeedbackInsert::new(feedback);

        let result = sqlx::query_as::<_, FeedbackModel>(
            r"
            INSERT INTO feedback (message, rating)
            VALUES (?, ?)
            RETURNING id, message, rating, created_at
            ",
        )
        .bind(insert.message)
        .bind(insert.rating)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Feedback::from(result))
    }

    #[instrument(skip(self, feedback), fields(count = feedback.len()))]
    async fn create_many(&self, feedback: &[NewFeedback]) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let mut written = 0;

        for item in feedback {
            let insert = FeedbackInsert::new(item);
            let result = sqlx::query(
                r"
                INSERT INTO feedback (message, rating)
                VALUES (?, ?)
                ",
            )
            .bind(insert.message)
            .bind(insert.rating)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            written += result.rows_affected();
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(written)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM feedback")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
