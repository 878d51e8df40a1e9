//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use webinar_core::value_objects::WebinarId;

use crate::response::ApiError;

/// Path extractor that reports failures as API errors
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(ApiPath(inner))
    }
}

/// Path parameters with webinar_id
#[derive(Debug, serde::Deserialize)]
pub struct WebinarIdPath {
    pub webinar_id: String,
}

impl WebinarIdPath {
    /// The webinar id as a domain identifier
    pub fn webinar_id(self) -> WebinarId {
        WebinarId::new(self.webinar_id)
    }
}
