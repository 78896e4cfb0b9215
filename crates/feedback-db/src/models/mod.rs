//! Database models - SQLx-compatible structs for SQLite tables

mod feedback;

pub use feedback::FeedbackModel;
