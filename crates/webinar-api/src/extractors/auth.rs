//! Authentication extractors
//!
//! Extract and verify the bearer token from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use webinar_common::AppError;
use webinar_core::entities::User;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from a JWT
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// Consume the extractor and return the domain user
    pub fn into_user(self) -> User {
        self.user
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    if rejection.is_missing() {
                        ApiError::MissingAuth
                    } else {
                        tracing::warn!("Rejected malformed authorization header");
                        ApiError::App(AppError::InvalidToken)
                    }
                })?;

        let app_state = AppState::from_ref(state);

        let user_id = app_state
            .service_context()
            .jwt_service()
            .authenticate(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected bearer token");
                ApiError::App(e)
            })?;

        Ok(AuthUser::new(User::from(user_id)))
    }
}

/// Caller that may or may not have presented a token
///
/// No Authorization header yields `None`. A header that is present must
/// still carry a valid token, otherwise the request is rejected with 401.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    /// Consume the extractor, falling back to the anonymous user
    pub fn into_user(self) -> User {
        self.0.map_or_else(User::anonymous, AuthUser::into_user)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(OptionalAuthUser(None));
        }

        let auth = AuthUser::from_request_parts(parts, state).await?;
        Ok(OptionalAuthUser(Some(auth)))
    }
}
