//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use webinar_core::entities::Webinar;

use super::responses::WebinarResponse;

impl From<&Webinar> for WebinarResponse {
    fn from(webinar: &Webinar) -> Self {
        Self {
            id: webinar.id.to_string(),
            organizer_id: webinar.organizer_id.to_string(),
            title: webinar.title.clone(),
            start_date: webinar.start_date,
            end_date: webinar.end_date,
            seats: webinar.seats,
        }
    }
}

impl From<Webinar> for WebinarResponse {
    fn from(webinar: Webinar) -> Self {
        Self::from(&webinar)
    }
}
