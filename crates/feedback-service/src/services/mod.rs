//! Business logic services
//!
//! Service layer implementations that validate input and orchestrate
//! repository operations.

pub mod context;
pub mod error;
pub mod feedback;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use feedback::FeedbackService;
