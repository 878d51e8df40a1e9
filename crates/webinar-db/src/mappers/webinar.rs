//! Webinar entity <-> model mapper

use webinar_core::entities::Webinar;
use webinar_core::value_objects::{UserId, WebinarId};

use crate::models::WebinarModel;

/// Convert WebinarModel to Webinar entity
impl From<WebinarModel> for Webinar {
    fn from(model: WebinarModel) -> Self {
        Webinar {
            id: WebinarId::new(model.id),
            organizer_id: UserId::new(model.organizer_id),
            title: model.title,
            start_date: model.start_date,
            end_date: model.end_date,
            seats: model.seats,
        }
    }
}
