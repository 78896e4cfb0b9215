//! Sort direction for listing feedback
//!
//! Client-supplied sort tokens are checked against a fixed allow-list and
//! never reach query text directly.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Ordering of feedback by creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first
    #[default]
    Desc,
}

impl SortOrder {
    /// Token form of this order
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a sort token outside the allow-list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sort order '{0}', expected one of: asc, desc")]
pub struct SortOrderParseError(pub String);

impl FromStr for SortOrder {
    type Err = SortOrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(SortOrderParseError(s.to_string()))
        }
    }
}
