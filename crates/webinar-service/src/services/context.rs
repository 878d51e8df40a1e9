//! Service context - dependency container for services
//!
//! Built once at startup by the composition root. The repository is injected
//! as a trait object so the same services run against PostgreSQL or memory.

use std::sync::Arc;

use webinar_common::auth::JwtService;
use webinar_core::traits::WebinarRepository;
use webinar_db::PgPool;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, absent when running on the in-memory backend
    pool: Option<PgPool>,

    // Repositories
    webinar_repo: Arc<dyn WebinarRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        webinar_repo: Arc<dyn WebinarRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            webinar_repo,
            jwt_service,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if one is configured
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    /// Get the webinar repository
    pub fn webinar_repo(&self) -> &dyn WebinarRepository {
        self.webinar_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("webinar_repo", &"dyn WebinarRepository")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    webinar_repo: Option<Arc<dyn WebinarRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn webinar_repo(mut self, repo: Arc<dyn WebinarRepository>) -> Self {
        self.webinar_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool,
            self.webinar_repo
                .ok_or_else(|| super::error::ServiceError::internal("webinar_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| super::error::ServiceError::internal("jwt_service is required"))?,
        ))
    }
}
