//! API Integration Tests
//!
//! Each test starts its own server over a fresh SQLite file in a temporary
//! directory, so nothing needs to be running beforehand.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, ErrorBody, FeedbackRecord, StatusBody, SubmitFeedback, TestServer,
};
use reqwest::StatusCode;

async fn submit(server: &TestServer, message: &str, rating: i64) {
    let response = server
        .post("/feedback", &SubmitFeedback::new(message, rating))
        .await
        .unwrap();
    let body: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "ok");
}

async fn list(server: &TestServer, query: &[(&str, &str)]) -> Vec<FeedbackRecord> {
    let response = server.get_query("/feedback", query).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_empty_database() {
    let server = TestServer::start().await.unwrap();
    assert!(list(&server, &[]).await.is_empty());
}

#[tokio::test]
async fn test_submit_then_list() {
    let server = TestServer::start().await.unwrap();
    submit(&server, "Great!", 5).await;

    let feedback = list(&server, &[]).await;
    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].message, "Great!");
    assert_eq!(feedback[0].rating, 5);
    assert!(feedback[0].id > 0);
    assert!(feedback[0].created_at.is_some());
}

#[tokio::test]
async fn test_filter_by_rating() {
    let server = TestServer::start().await.unwrap();
    submit(&server, "loved it", 5).await;
    submit(&server, "meh", 3).await;
    submit(&server, "also loved it", 5).await;

    let fives = list(&server, &[("rating", "5")]).await;
    assert_eq!(fives.len(), 2);
    assert!(fives.iter().all(|f| f.rating == 5));

    let fours = list(&server, &[("rating", "4")]).await;
    assert!(fours.is_empty());
}

#[tokio::test]
async fn test_sort_orders() {
    let server = TestServer::start().await.unwrap();
    for i in 1..=4 {
        submit(&server, &format!("entry {i}"), 4).await;
    }

    let newest_first = list(&server, &[]).await;
    assert_eq!(newest_first.len(), 4);
    assert_eq!(newest_first[0].message, "entry 4");
    assert!(newest_first
        .windows(2)
        .all(|w| w[0].created_at >= w[1].created_at && w[0].id > w[1].id));

    let oldest_first = list(&server, &[("sort", "asc")]).await;
    assert_eq!(oldest_first[0].message, "entry 1");
    assert!(oldest_first
        .windows(2)
        .all(|w| w[0].created_at <= w[1].created_at && w[0].id < w[1].id));

    let explicit_desc = list(&server, &[("sort", "DESC")]).await;
    assert_eq!(explicit_desc[0].message, "entry 4");
}

#[tokio::test]
async fn test_empty_parameters_are_ignored() {
    let server = TestServer::start().await.unwrap();
    submit(&server, "one", 1).await;
    submit(&server, "two", 2).await;

    let feedback = list(&server, &[("rating", ""), ("sort", "")]).await;
    assert_eq!(feedback.len(), 2);
    assert_eq!(feedback[0].message, "two");
}

#[tokio::test]
async fn test_seeded_data_is_listed() {
    let server = TestServer::start().await.unwrap();
    assert_eq!(server.seed().await.unwrap(), 10);

    assert_eq!(list(&server, &[]).await.len(), 10);
    assert_eq!(list(&server, &[("rating", "5")]).await.len(), 4);
}

// ============================================================================
// Hostile filters
// ============================================================================

#[tokio::test]
async fn test_injected_rating_is_rejected() {
    let server = TestServer::start().await.unwrap();
    submit(&server, "private", 2).await;

    let response = server
        .get_query("/feedback", &[("rating", "1 OR 1=1")])
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.code, "INVALID_QUERY_PARAMETER");
    assert!(!body.error.contains("private"));
}

#[tokio::test]
async fn test_unknown_sort_is_rejected() {
    let server = TestServer::start().await.unwrap();

    for sort in ["sideways", "desc; DROP TABLE feedback", "created_at"] {
        let response = server.get_query("/feedback", &[("sort", sort)]).await.unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body.code, "INVALID_QUERY_PARAMETER");
    }

    // The table survived
    assert!(list(&server, &[]).await.is_empty());
}

// ============================================================================
// Submission
// ============================================================================

#[tokio::test]
async fn test_message_is_stored_verbatim() {
    let server = TestServer::start().await.unwrap();
    let message = "Robert'); DROP TABLE feedback;-- \u{1F600}";
    submit(&server, message, 3).await;

    let feedback = list(&server, &[]).await;
    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].message, message);
}

#[tokio::test]
async fn test_empty_message_is_accepted() {
    let server = TestServer::start().await.unwrap();
    submit(&server, "", 1).await;
    assert_eq!(list(&server, &[]).await[0].message, "");
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/feedback", &serde_json::json!({ "message": "no rating" }))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "INVALID_BODY");

    let response = server
        .post("/feedback", &serde_json::json!({ "rating": 4 }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert!(list(&server, &[]).await.is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_raw("/feedback", "{not json").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "INVALID_BODY");

    let response = server
        .post_raw("/feedback", r#"{"message": "x", "rating": "five"}"#)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert!(list(&server, &[]).await.is_empty());
}

#[tokio::test]
async fn test_out_of_range_rating_is_rejected() {
    let server = TestServer::start().await.unwrap();

    for rating in [0, 6, -1] {
        let response = server
            .post("/feedback", &SubmitFeedback::new("out of range", rating))
            .await
            .unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body.code, "VALIDATION_ERROR");
        assert!(body.details.is_some());
    }

    assert!(list(&server, &[]).await.is_empty());
}
