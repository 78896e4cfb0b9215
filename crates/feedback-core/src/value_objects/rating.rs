//! Rating value object - a bounded satisfaction score

use std::fmt;

use crate::error::DomainError;

/// Satisfaction score accepted for new feedback (1 through 5 inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(i64);

impl Rating {
    /// Lowest accepted score
    pub const MIN: i64 = 1;
    /// Highest accepted score
    pub const MAX: i64 = 5;

    /// Create a rating, rejecting values outside `MIN..=MAX`
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if Self::contains(value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidRating(value))
        }
    }

    /// Check whether a raw value is an accepted score
    #[inline]
    pub fn contains(value: i64) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }

    /// Get the inner value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
