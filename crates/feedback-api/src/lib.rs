//! # feedback-api
//!
//! REST API server built with Axum framework.
//!
//! - `GET /feedback?rating=<int>&sort=<asc|desc>` lists feedback
//! - `POST /feedback` records feedback
//! - `GET /health`, `GET /health/ready` report liveness and readiness

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
