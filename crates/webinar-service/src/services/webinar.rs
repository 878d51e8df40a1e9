//! Webinar service
//!
//! Handles webinar creation, seat changes, and lookups.

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use webinar_core::entities::{User, Webinar};
use webinar_core::error::DomainError;
use webinar_core::value_objects::{UserId, WebinarId};

use crate::dto::WebinarResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Input for changing the seat capacity of a webinar
#[derive(Debug, Clone)]
pub struct ChangeSeatsCommand {
    /// The caller requesting the change
    pub user: User,
    pub webinar_id: WebinarId,
    /// Requested new capacity
    pub seats: i32,
}

/// Input for creating a webinar
#[derive(Debug, Clone)]
pub struct CreateWebinarCommand {
    pub id: WebinarId,
    pub title: String,
    pub seats: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub organizer_id: UserId,
}

/// Webinar service
pub struct WebinarService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WebinarService<'a> {
    /// Create a new WebinarService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Change the number of seats of a webinar
    ///
    /// Checks run in a fixed order and the first failure wins: existence,
    /// organizer ownership, growth, then the upper bound. The repository is
    /// only written when every check passes.
    #[instrument(skip(self, command), fields(webinar_id = %command.webinar_id, user_id = %command.user.id, seats = command.seats))]
    pub async fn change_seats(&self, command: ChangeSeatsCommand) -> ServiceResult<()> {
        let webinar = self
            .ctx
            .webinar_repo()
            .find_by_id(&command.webinar_id)
            .await?
            .ok_or(DomainError::WebinarNotFound)?;

        if !webinar.is_organizer(&command.user.id) {
            warn!("Seat change rejected: caller is not the organizer");
            return Err(DomainError::WebinarNotOrganizer.into());
        }

        if command.seats <= webinar.seats {
            warn!(current = webinar.seats, "Seat change rejected: seats not increased");
            return Err(DomainError::SeatsCannotBeReduced.into());
        }

        if Webinar::exceeds_max_seats(command.seats) {
            warn!("Seat change rejected: above maximum");
            return Err(DomainError::SeatsExceedMaximum.into());
        }

        let updated = webinar.with_seats(command.seats);
        self.ctx.webinar_repo().update(&updated).await?;

        info!(previous = webinar.seats, "Webinar seats updated");

        Ok(())
    }

    /// Create a new webinar
    #[instrument(skip(self, command), fields(webinar_id = %command.id, organizer_id = %command.organizer_id))]
    pub async fn create_webinar(&self, command: CreateWebinarCommand) -> ServiceResult<()> {
        let webinar = Webinar::new(
            command.id,
            command.organizer_id,
            command.title,
            command.start_date,
            command.end_date,
            command.seats,
        );

        validate_new_webinar(&webinar)?;

        self.ctx.webinar_repo().create(&webinar).await?;

        info!(seats = webinar.seats, "Webinar created");

        Ok(())
    }

    /// Get webinar by ID
    #[instrument(skip(self))]
    pub async fn get_webinar(&self, webinar_id: &WebinarId) -> ServiceResult<WebinarResponse> {
        let webinar = self
            .ctx
            .webinar_repo()
            .find_by_id(webinar_id)
            .await?
            .ok_or(DomainError::WebinarNotFound)?;

        Ok(WebinarResponse::from(&webinar))
    }
}

fn validate_new_webinar(webinar: &Webinar) -> Result<(), DomainError> {
    if webinar.id.is_blank() {
        return Err(DomainError::invalid_input("id is required"));
    }
    if webinar.title.trim().is_empty() {
        return Err(DomainError::invalid_input("title is required"));
    }
    if webinar.organizer_id.is_blank() {
        return Err(DomainError::invalid_input("organizerId is required"));
    }
    if webinar.seats < Webinar::MIN_SEATS {
        return Err(DomainError::invalid_input(
            "Webinar must have at least 1 seat",
        ));
    }
    if Webinar::exceeds_max_seats(webinar.seats) {
        return Err(DomainError::SeatsExceedMaximum);
    }
    if !webinar.has_valid_schedule() {
        return Err(DomainError::invalid_input(
            "endDate must be after startDate",
        ));
    }
    Ok(())
}
