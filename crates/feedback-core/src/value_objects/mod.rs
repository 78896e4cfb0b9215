//! Value objects - immutable types that represent domain concepts

mod rating;
mod sort_order;

pub use rating::Rating;
pub use sort_order::{SortOrder, SortOrderParseError};
