//! Webinar database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for webinars table
#[derive(Debug, Clone, FromRow)]
pub struct WebinarModel {
    pub id: String,
    pub organizer_id: String,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}
