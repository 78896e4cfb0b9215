//! Service context - dependency container for services

use std::sync::Arc;

use feedback_core::traits::FeedbackRepository;
use feedback_db::{SqliteFeedbackRepository, SqlitePool};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: SqlitePool,

    // Repositories
    feedback_repo: Arc<dyn FeedbackRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(pool: SqlitePool, feedback_repo: Arc<dyn FeedbackRepository>) -> Self {
        Self {
            pool,
            feedback_repo,
        }
    }

    /// Get the SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the feedback repository
    pub fn feedback_repo(&self) -> &dyn FeedbackRepository {
        self.feedback_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"SqlitePool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<SqlitePool>,
    feedback_repo: Option<Arc<dyn FeedbackRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: SqlitePool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn feedback_repo(mut self, repo: Arc<dyn FeedbackRepository>) -> Self {
        self.feedback_repo = Some(repo);
        self
    }

    /// Build the context; the repository defaults to SQLite over the pool
    pub fn build(self) -> Result<ServiceContext, &'static str> {
        let pool = self.pool.ok_or("pool is required")?;
        let feedback_repo = match self.feedback_repo {
            Some(repo) => repo,
            None => Arc::new(SqliteFeedbackRepository::new(pool.clone())),
        };
        Ok(ServiceContext::new(pool, feedback_repo))
    }
}
