//! Query string extractors
//!
//! A missing or empty parameter means "no filter"; ids are parsed here so
//! the services only ever see [`RecordId`]s.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use blog_core::RecordId;
use blog_service::CommentKey;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::response::ApiError;

/// Raw comment query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentQueryParams {
    /// Id of the commenting user
    #[serde(default)]
    #[param(value_type = Option<i64>)]
    pub author_id: Option<String>,
    /// Id of the commented blog
    #[serde(default)]
    #[param(value_type = Option<i64>)]
    pub blog_id: Option<String>,
}

/// Parsed comment query; unset ids are zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentQuery {
    pub author_id: RecordId,
    pub blog_id: RecordId,
}

impl CommentQuery {
    /// The pair as a comment key
    pub fn key(self) -> CommentKey {
        CommentKey::new(self.author_id, self.blog_id)
    }
}

impl TryFrom<CommentQueryParams> for CommentQuery {
    type Error = ApiError;

    fn try_from(params: CommentQueryParams) -> Result<Self, Self::Error> {
        Ok(Self {
            author_id: parse_id(params.author_id.as_deref(), "author_id")?,
            blog_id: parse_id(params.blog_id.as_deref(), "blog_id")?,
        })
    }
}

fn parse_id(raw: Option<&str>, name: &str) -> Result<RecordId, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(RecordId::UNSET),
        Some(s) => s
            .parse()
            .map_err(|_| ApiError::invalid_query(format!("Invalid '{name}' format"))),
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CommentQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<CommentQueryParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Self::try_from(params)
    }
}

/// `?name=` filter for listing users
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameFilter {
    /// Exact name to match
    #[serde(default)]
    pub name: String,
}

/// `?title=` filter for listing blogs
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TitleFilter {
    /// Exact title to match
    #[serde(default)]
    pub title: String,
}
