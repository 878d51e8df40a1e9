//! User entity - the identity of a caller

use crate::value_objects::UserId;

/// Caller of a use case
///
/// Only the identifier matters to the webinar use cases; profile data lives
/// with the identity provider. A request without credentials is carried as
/// the anonymous user, whose id is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
}

impl User {
    /// Create a new User
    pub fn new(id: impl Into<UserId>) -> Self {
        Self { id: id.into() }
    }

    /// Caller that presented no credentials
    pub fn anonymous() -> Self {
        Self {
            id: UserId::new(""),
        }
    }

    /// Check if this caller presented no credentials
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.id.is_blank()
    }
}

impl From<UserId> for User {
    fn from(id: UserId) -> Self {
        Self { id }
    }
}
