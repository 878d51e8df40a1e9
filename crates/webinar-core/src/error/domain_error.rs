//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::WebinarId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Webinar not found")]
    WebinarNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("User is not allowed to update this webinar")]
    WebinarNotOrganizer,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Webinar already exists: {0}")]
    WebinarAlreadyExists(WebinarId),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("You cannot reduce the number of seats")]
    SeatsCannotBeReduced,

    #[error("Webinar must have at most 1000 seats")]
    SeatsExceedMaximum,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::WebinarNotFound => "WEBINAR_NOT_FOUND",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::WebinarNotOrganizer => "WEBINAR_NOT_ORGANIZER",
            Self::WebinarAlreadyExists(_) => "WEBINAR_ALREADY_EXISTS",
            Self::SeatsCannotBeReduced => "SEATS_CANNOT_BE_REDUCED",
            Self::SeatsExceedMaximum => "SEATS_EXCEED_MAXIMUM",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::WebinarNotFound)
    }

    /// Check if this is a validation or business rule error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::SeatsCannotBeReduced | Self::SeatsExceedMaximum
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::WebinarNotOrganizer)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::WebinarAlreadyExists(_))
    }
}
