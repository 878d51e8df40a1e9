//! Webinar entity - a scheduled online event with a bounded number of seats

use chrono::{DateTime, Utc};

use crate::value_objects::{UserId, WebinarId};

/// Webinar entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Webinar {
    pub id: WebinarId,
    pub organizer_id: UserId,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}

impl Webinar {
    /// Smallest seat count a webinar may have
    pub const MIN_SEATS: i32 = 1;

    /// Largest seat count a webinar may have
    pub const MAX_SEATS: i32 = 1000;

    /// Create a new Webinar
    pub fn new(
        id: WebinarId,
        organizer_id: UserId,
        title: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        seats: i32,
    ) -> Self {
        Self {
            id,
            organizer_id,
            title,
            start_date,
            end_date,
            seats,
        }
    }

    /// Check if a user is the webinar organizer
    ///
    /// A blank id never matches, so an anonymous caller is never the organizer.
    #[inline]
    pub fn is_organizer(&self, user_id: &UserId) -> bool {
        !user_id.is_blank() && &self.organizer_id == user_id
    }

    /// Check if a seat count lies within `[MIN_SEATS, MAX_SEATS]`
    #[inline]
    pub fn is_valid_seat_count(seats: i32) -> bool {
        (Self::MIN_SEATS..=Self::MAX_SEATS).contains(&seats)
    }

    /// Check if a seat count is above `MAX_SEATS`
    #[inline]
    pub fn exceeds_max_seats(seats: i32) -> bool {
        seats > Self::MAX_SEATS
    }

    /// Check if the webinar ends strictly after it starts
    #[inline]
    pub fn has_valid_schedule(&self) -> bool {
        self.end_date > self.start_date
    }

    /// Copy of this webinar with a different seat count.
    ///
    /// Identity, organizer, title and dates are carried over unchanged.
    pub fn with_seats(&self, seats: i32) -> Self {
        Self {
            seats,
            ..self.clone()
        }
    }
}
