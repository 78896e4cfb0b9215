//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use feedback_api::{create_app, create_app_state};
use feedback_common::AppConfig;
use feedback_db::{create_pool, seed_sample_feedback, DatabaseConfig, SqliteFeedbackRepository};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server bound to an ephemeral port with its own database file
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    database_url: String,
    _db_dir: TempDir,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server over an empty database
    pub async fn start() -> Result<Self> {
        let db_dir = tempfile::tempdir()?;
        let database_url = format!(
            "sqlite://{}?mode=rwc",
            db_dir.path().join("feedback.db").display()
        );

        let config = test_config(&[("DATABASE_URL", database_url.as_str())])?;
        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            database_url,
            _db_dir: db_dir,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with URL-encoded query parameters
    pub async fn get_query(&self, path: &str, query: &[(&str, &str)]) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).query(query).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with a raw JSON-typed body
    pub async fn post_raw(&self, path: &str, body: &'static str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?)
    }

    /// Insert the sample rows through a separate pool on the same file
    pub async fn seed(&self) -> Result<u64> {
        let config = DatabaseConfig {
            url: self.database_url.clone(),
            ..Default::default()
        };
        let pool = create_pool(&config).await?;
        let inserted = seed_sample_feedback(&SqliteFeedbackRepository::new(pool.clone())).await?;
        pool.close().await;
        Ok(inserted)
    }
}

/// Build a test configuration from explicit values only
///
/// The process environment is ignored so a developer's `.env` cannot leak in.
pub fn test_config(pairs: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();

    AppConfig::from_lookup(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
