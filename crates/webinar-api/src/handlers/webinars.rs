//! Webinar handlers
//!
//! Endpoints for creating webinars and changing their seat capacity.

use axum::{extract::State, Json};
use webinar_service::{ChangeSeatsRequest, CreateWebinarRequest, MessageResponse, WebinarResponse};

use crate::extractors::{ApiPath, OptionalAuthUser, ValidatedJson, WebinarIdPath};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a new webinar
///
/// POST /webinars
pub async fn create_webinar(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateWebinarRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = state.webinar_service();
    service.create_webinar(request.into()).await?;
    Ok(Created(Json(MessageResponse::webinar_created())))
}

/// Get webinar by ID
///
/// GET /webinars/{webinar_id}
pub async fn get_webinar(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<WebinarIdPath>,
) -> ApiResult<Json<WebinarResponse>> {
    let service = state.webinar_service();
    let response = service.get_webinar(&path.webinar_id()).await?;
    Ok(Json(response))
}

/// Change the seat capacity of a webinar
///
/// POST /webinars/{webinar_id}/seats
///
/// A request without a token runs as the anonymous user, so the use case
/// answers 404 for an unknown webinar and 403 for an existing one.
pub async fn change_seats(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ApiPath(path): ApiPath<WebinarIdPath>,
    ValidatedJson(request): ValidatedJson<ChangeSeatsRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = state.webinar_service();
    let command = request.into_command(auth.into_user(), path.webinar_id());
    service.change_seats(command).await?;
    Ok(Json(MessageResponse::seats_updated()))
}
