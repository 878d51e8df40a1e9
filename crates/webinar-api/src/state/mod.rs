//! Application state handed to every handler

use std::sync::Arc;

use webinar_common::AppConfig;
use webinar_service::{ServiceContext, WebinarService};

/// Shared state of the webinar router
///
/// `ServiceContext` is already a bundle of `Arc`s, so cloning the state per
/// request only bumps reference counts.
#[derive(Debug, Clone)]
pub struct AppState {
    ctx: ServiceContext,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(ctx: ServiceContext, config: AppConfig) -> Self {
        Self {
            ctx,
            config: Arc::new(config),
        }
    }

    /// Dependencies of the use cases
    pub fn service_context(&self) -> &ServiceContext {
        &self.ctx
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Webinar use cases bound to this state's repository
    pub fn webinar_service(&self) -> WebinarService<'_> {
        WebinarService::new(&self.ctx)
    }
}
