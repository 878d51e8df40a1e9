//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Unique webinar id so tests never collide on a shared database
pub fn unique_webinar_id() -> String {
    format!("webinar-{}", uuid::Uuid::new_v4())
}

/// Create webinar request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebinarRequest {
    pub id: String,
    pub title: String,
    pub seats: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub organizer_id: String,
}

impl CreateWebinarRequest {
    /// A one-hour webinar owned by `organizer_id`
    pub fn unique(organizer_id: &str, seats: i32) -> Self {
        Self {
            id: unique_webinar_id(),
            title: "Webinar title".to_string(),
            seats,
            start_date: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).single().unwrap_or_default(),
            end_date: Utc.with_ymd_and_hms(2023, 1, 1, 1, 0, 0).single().unwrap_or_default(),
            organizer_id: organizer_id.to_string(),
        }
    }
}

/// Change seats request body
#[derive(Debug, Clone, Serialize)]
pub struct ChangeSeatsRequest {
    pub seats: i32,
}

/// `{"message": ...}` acknowledgement
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Webinar body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebinarResponse {
    pub id: String,
    pub organizer_id: String,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}
