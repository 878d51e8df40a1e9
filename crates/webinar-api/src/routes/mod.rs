//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, webinars};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(webinar_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Webinar routes
fn webinar_routes() -> Router<AppState> {
    Router::new()
        .route("/webinars", post(webinars::create_webinar))
        .route("/webinars/:webinar_id", get(webinars::get_webinar))
        .route("/webinars/:webinar_id/seats", post(webinars::change_seats))
}
