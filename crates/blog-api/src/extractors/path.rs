//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use blog_core::RecordId;

use crate::response::ApiError;

/// The `:id` segment of a route, parsed as a record id
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub RecordId);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        raw.parse()
            .map(IdPath)
            .map_err(|_| ApiError::invalid_path("Invalid id format"))
    }
}
