//! Blog handlers

use axum::{
    extract::{Query, State},
    Json,
};
use blog_service::{BlogRequest, BlogResponse, BlogService, BlogsResponse};

use crate::extractors::{IdPath, TitleFilter, ValidatedJson};
use crate::response::{ApiResult, Empty, ErrorBody};
use crate::state::AppState;

/// Get blog by ID
///
/// GET /api/blog/{id}
#[utoipa::path(
    get, path = "/api/blog/{id}", tag = "blogs",
    params(("id" = i64, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Blog", body = BlogResponse),
        (status = 404, description = "No such blog", body = ErrorBody)
    )
)]
pub async fn get_blog(
    State(state): State<AppState>,
    IdPath(blog_id): IdPath,
) -> ApiResult<Json<BlogResponse>> {
    let service = BlogService::new(state.service_context());
    let response = service.get_blog(blog_id).await?;
    Ok(Json(response))
}

/// List blogs, optionally by exact title
///
/// GET /api/blog
#[utoipa::path(
    get, path = "/api/blog", tag = "blogs",
    params(TitleFilter),
    responses((status = 200, description = "Blogs", body = BlogsResponse))
)]
pub async fn list_blogs(
    State(state): State<AppState>,
    Query(filter): Query<TitleFilter>,
) -> ApiResult<Json<BlogsResponse>> {
    let service = BlogService::new(state.service_context());
    let response = service.list_blogs(&filter.title).await?;
    Ok(Json(response))
}

/// Create blog
///
/// POST /api/blog
#[utoipa::path(
    post, path = "/api/blog", tag = "blogs",
    request_body = BlogRequest,
    responses(
        (status = 200, description = "Created blog", body = BlogResponse),
        (status = 400, description = "Validation error or unknown author", body = ErrorBody)
    )
)]
pub async fn create_blog(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<BlogRequest>,
) -> ApiResult<Json<BlogResponse>> {
    let service = BlogService::new(state.service_context());
    let response = service.create_blog(request).await?;
    Ok(Json(response))
}

/// Replace a blog
///
/// PUT /api/blog/{id}
#[utoipa::path(
    put, path = "/api/blog/{id}", tag = "blogs",
    params(("id" = i64, Path, description = "Blog id")),
    request_body = BlogRequest,
    responses(
        (status = 200, description = "Updated blog", body = BlogResponse),
        (status = 400, description = "Validation error or unknown author", body = ErrorBody),
        (status = 404, description = "No such blog", body = ErrorBody)
    )
)]
pub async fn update_blog(
    State(state): State<AppState>,
    IdPath(blog_id): IdPath,
    ValidatedJson(request): ValidatedJson<BlogRequest>,
) -> ApiResult<Json<BlogResponse>> {
    let service = BlogService::new(state.service_context());
    let response = service.update_blog(blog_id, request).await?;
    Ok(Json(response))
}

/// Delete a blog and its comments
///
/// DELETE /api/blog/{id}
#[utoipa::path(
    delete, path = "/api/blog/{id}", tag = "blogs",
    params(("id" = i64, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "No such blog", body = ErrorBody)
    )
)]
pub async fn delete_blog(
    State(state): State<AppState>,
    IdPath(blog_id): IdPath,
) -> ApiResult<Empty> {
    let service = BlogService::new(state.service_context());
    service.delete_blog(blog_id).await?;
    Ok(Empty)
}
