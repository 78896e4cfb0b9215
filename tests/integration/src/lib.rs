//! Integration test utilities for the feedback service
//!
//! Spawns the real Axum application over a throwaway SQLite file and talks
//! to it with `reqwest`.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
