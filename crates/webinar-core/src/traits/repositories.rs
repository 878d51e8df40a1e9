//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::Webinar;
use crate::error::DomainError;
use crate::value_objects::WebinarId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Webinar Repository
// ============================================================================

/// Persistence boundary for webinars. Holds no business rules.
#[async_trait]
pub trait WebinarRepository: Send + Sync {
    /// Find webinar by ID. A missing webinar is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: &WebinarId) -> RepoResult<Option<Webinar>>;

    /// Persist a brand-new webinar
    ///
    /// Returns `WebinarAlreadyExists` if the id is taken.
    async fn create(&self, webinar: &Webinar) -> RepoResult<()>;

    /// Replace the stored state of an existing webinar
    ///
    /// Returns `WebinarNotFound` if no record matches `webinar.id`.
    async fn update(&self, webinar: &Webinar) -> RepoResult<()>;
}
