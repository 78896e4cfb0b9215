//! Feedback filter extractor
//!
//! Extracts the optional `rating` filter and `sort` direction from the query
//! string. Both are validated here so nothing unchecked reaches the query.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use feedback_core::{FeedbackQuery, SortOrder};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw filter query parameters
#[derive(Debug, Default, Deserialize)]
pub struct FeedbackFilterParams {
    /// Only return feedback with this rating
    #[serde(default)]
    pub rating: Option<String>,
    /// `asc` or `desc` by creation time
    #[serde(default)]
    pub sort: Option<String>,
}

/// Validated filter for listing feedback
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackFilter(pub FeedbackQuery);

/// Treat an empty or whitespace-only parameter as absent
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<FeedbackFilterParams> for FeedbackFilter {
    type Error = ApiError;

    fn try_from(params: FeedbackFilterParams) -> Result<Self, Self::Error> {
        let rating = non_empty(params.rating)
            .map(|s| {
                s.trim()
                    .parse::<i64>()
                    .map_err(|_| ApiError::invalid_query("Invalid 'rating' filter: expected an integer"))
            })
            .transpose()?;

        let sort = match non_empty(params.sort) {
            Some(s) => s
                .parse::<SortOrder>()
                .map_err(|e| ApiError::invalid_query(e.to_string()))?,
            None => SortOrder::default(),
        };

        Ok(FeedbackFilter(FeedbackQuery::new(rating, sort)))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for FeedbackFilter
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<FeedbackFilterParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Self::try_from(params)
    }
}
