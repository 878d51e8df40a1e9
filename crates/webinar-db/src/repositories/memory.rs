//! In-memory implementation of WebinarRepository
//!
//! Backed by a `DashMap` keyed by webinar id. Used by use-case tests and by
//! the server when `STORAGE_BACKEND=memory`.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::instrument;

use webinar_core::entities::Webinar;
use webinar_core::error::DomainError;
use webinar_core::traits::{RepoResult, WebinarRepository};
use webinar_core::value_objects::WebinarId;

/// In-memory webinar store
#[derive(Debug, Default)]
pub struct InMemoryWebinarRepository {
    webinars: DashMap<WebinarId, Webinar>,
}

impl InMemoryWebinarRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with webinars
    pub fn with_webinars(webinars: impl IntoIterator<Item = Webinar>) -> Self {
        let repo = Self::new();
        for webinar in webinars {
            repo.webinars.insert(webinar.id.clone(), webinar);
        }
        repo
    }

    /// Synchronous lookup, for assertions in tests
    #[must_use]
    pub fn get(&self, id: &WebinarId) -> Option<Webinar> {
        self.webinars.get(id).map(|entry| entry.value().clone())
    }

    /// Number of stored webinars
    #[must_use]
    pub fn len(&self) -> usize {
        self.webinars.len()
    }

    /// Check if the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.webinars.is_empty()
    }

    /// Remove every stored webinar
    pub fn clear(&self) {
        self.webinars.clear();
    }
}

#[async_trait]
impl WebinarRepository for InMemoryWebinarRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &WebinarId) -> RepoResult<Option<Webinar>> {
        Ok(self.get(id))
    }

    #[instrument(skip(self), fields(webinar_id = %webinar.id))]
    async fn create(&self, webinar: &Webinar) -> RepoResult<()> {
        match self.webinars.entry(webinar.id.clone()) {
            Entry::Occupied(_) => Err(DomainError::WebinarAlreadyExists(webinar.id.clone())),
            Entry::Vacant(slot) => {
                slot.insert(webinar.clone());
                Ok(())
            }
        }
    }

    #[instrument(skip(self), fields(webinar_id = %webinar.id))]
    async fn update(&self, webinar: &Webinar) -> RepoResult<()> {
        match self.webinars.get_mut(&webinar.id) {
            Some(mut stored) => {
                *stored = webinar.clone();
                Ok(())
            }
            None => Err(DomainError::WebinarNotFound),
        }
    }
}
