//! Domain entities - core business objects

mod feedback;

pub use feedback::{Feedback, NewFeedback};
