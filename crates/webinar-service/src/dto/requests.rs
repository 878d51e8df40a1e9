//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field names follow the camelCase wire format.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use webinar_core::entities::User;
use webinar_core::value_objects::{UserId, WebinarId};

use crate::services::{ChangeSeatsCommand, CreateWebinarCommand};

/// Create webinar request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebinarRequest {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,

    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    /// Upper bound is checked by the use case so it reports its own error
    #[validate(range(min = 1, message = "Webinar must have at least 1 seat"))]
    pub seats: i32,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    #[validate(length(min = 1, message = "organizerId is required"))]
    pub organizer_id: String,
}

impl From<CreateWebinarRequest> for CreateWebinarCommand {
    fn from(request: CreateWebinarRequest) -> Self {
        Self {
            id: WebinarId::new(request.id),
            title: request.title,
            seats: request.seats,
            start_date: request.start_date,
            end_date: request.end_date,
            organizer_id: UserId::new(request.organizer_id),
        }
    }
}

/// Change seats request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangeSeatsRequest {
    pub seats: i32,
}

impl ChangeSeatsRequest {
    /// Build the use-case command for the authenticated caller and target webinar
    pub fn into_command(self, user: User, webinar_id: WebinarId) -> ChangeSeatsCommand {
        ChangeSeatsCommand {
            user,
            webinar_id,
            seats: self.seats,
        }
    }
}
