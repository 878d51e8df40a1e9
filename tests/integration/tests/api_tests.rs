//! API Integration Tests
//!
//! Run against a spawned server on the in-memory backend. The PostgreSQL
//! variants run only when DATABASE_URL is set.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, postgres_config, TestServer,
};
use reqwest::StatusCode;

/// Create a webinar over HTTP and return its id
async fn create_webinar(server: &TestServer, organizer: &str, seats: i32) -> String {
    let request = CreateWebinarRequest::unique(organizer, seats);
    let response = server.post("/webinars", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    request.id
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
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Create Webinar Tests
// ============================================================================

#[tokio::test]
async fn test_create_webinar() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateWebinarRequest::unique("alice", 100);

    let response = server.post("/webinars", &request).await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body.message, "Webinar created");

    let response = server.get(&format!("/webinars/{}", request.id)).await.unwrap();
    let webinar: WebinarResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(webinar.id, request.id);
    assert_eq!(webinar.organizer_id, "alice");
    assert_eq!(webinar.title, "Webinar title");
    assert_eq!(webinar.seats, 100);
    assert_eq!(webinar.start_date, request.start_date);
    assert_eq!(webinar.end_date, request.end_date);
}

#[tokio::test]
async fn test_create_webinar_with_empty_payload() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/webinars", &serde_json::json!({})).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert!(body.error.contains("Invalid input"));
}

#[tokio::test]
async fn test_create_duplicate_webinar() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateWebinarRequest::unique("alice", 100);

    server.post("/webinars", &request).await.unwrap();
    let response = server.post("/webinars", &request).await.unwrap();

    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

// ============================================================================
// Change Seats Tests
// ============================================================================

#[tokio::test]
async fn test_update_seats() {
    let server = TestServer::start().await.expect("Failed to start server");
    let webinar_id = create_webinar(&server, "alice", 50).await;
    let token = server.token_for("alice").unwrap();

    let response = server
        .post_auth(
            &format!("/webinars/{webinar_id}/seats"),
            &token,
            &ChangeSeatsRequest { seats: 100 },
        )
        .await
        .unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Seats updated");

    let response = server.get(&format!("/webinars/{webinar_id}")).await.unwrap();
    let webinar: WebinarResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(webinar.seats, 100);
}

#[tokio::test]
async fn test_update_seats_of_missing_webinar() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for("alice").unwrap();

    let response = server
        .post_auth("/webinars/non-existent-id/seats", &token, &ChangeSeatsRequest { seats: 100 })
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(body.error, "Webinar not found");
}

#[tokio::test]
async fn test_update_seats_as_non_organizer() {
    let server = TestServer::start().await.expect("Failed to start server");
    let webinar_id = create_webinar(&server, "alice", 50).await;
    let token = server.token_for("bob").unwrap();

    let response = server
        .post_auth(
            &format!("/webinars/{webinar_id}/seats"),
            &token,
            &ChangeSeatsRequest { seats: 100 },
        )
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error, "User is not allowed to update this webinar");
    assert_eq!(body.code, "WEBINAR_NOT_ORGANIZER");

    let response = server.get(&format!("/webinars/{webinar_id}")).await.unwrap();
    let webinar: WebinarResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(webinar.seats, 50);
}

#[tokio::test]
async fn test_update_seats_without_token() {
    let server = TestServer::start().await.expect("Failed to start server");
    let webinar_id = create_webinar(&server, "alice", 50).await;

    let response = server
        .post(&format!("/webinars/{webinar_id}/seats"), &ChangeSeatsRequest { seats: 100 })
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.code, "WEBINAR_NOT_ORGANIZER");

    let response = server.get(&format!("/webinars/{webinar_id}")).await.unwrap();
    let webinar: WebinarResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(webinar.seats, 50);
}

#[tokio::test]
async fn test_update_seats_of_missing_webinar_without_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/webinars/non-existent-webinar/seats", &ChangeSeatsRequest { seats: 50 })
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(body.error, "Webinar not found");
}

#[tokio::test]
async fn test_update_seats_with_invalid_token() {
    let server = TestServer::start().await.expect("Failed to start server");
    let webinar_id = create_webinar(&server, "alice", 50).await;

    let response = server
        .post_auth(
            &format!("/webinars/{webinar_id}/seats"),
            "not-a-jwt",
            &ChangeSeatsRequest { seats: 100 },
        )
        .await
        .unwrap();

    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// PostgreSQL Backend
// ============================================================================

#[tokio::test]
async fn test_update_seats_on_postgres() {
    let Some(config) = postgres_config() else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");
    let webinar_id = create_webinar(&server, "alice", 50).await;
    let token = server.token_for("alice").unwrap();

    let response = server
        .post_auth(
            &format!("/webinars/{webinar_id}/seats"),
            &token,
            &ChangeSeatsRequest { seats: 100 },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(
            &format!("/webinars/{webinar_id}/seats"),
            &token,
            &ChangeSeatsRequest { seats: 80 },
        )
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error, "You cannot reduce the number of seats");

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
