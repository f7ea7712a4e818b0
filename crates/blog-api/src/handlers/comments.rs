//! Comment handlers
//!
//! Comments are addressed by the `author_id` and `blog_id` query parameters.

use axum::{extract::State, Json};
use blog_service::{CommentRequest, CommentResponse, CommentService, CommentsResponse};

use crate::extractors::{CommentQuery, CommentQueryParams, ValidatedJson};
use crate::response::{ApiError, ApiResult, Empty, ErrorBody};
use crate::state::AppState;

/// List comments, optionally filtered by user and/or blog
///
/// GET /api/comment
#[utoipa::path(
    get, path = "/api/comment", tag = "comments",
    params(CommentQueryParams),
    responses(
        (status = 200, description = "Comments", body = CommentsResponse),
        (status = 400, description = "Malformed id", body = ErrorBody)
    )
)]
pub async fn list_comments(
    State(state): State<AppState>,
    query: CommentQuery,
) -> ApiResult<Json<CommentsResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .list_comments(query.author_id, query.blog_id)
        .await?;
    Ok(Json(response))
}

/// Create comment
///
/// POST /api/comment
#[utoipa::path(
    post, path = "/api/comment", tag = "comments",
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Created comment", body = CommentResponse),
        (status = 400, description = "Validation error or unknown user/blog", body = ErrorBody),
        (status = 409, description = "User already commented on the blog", body = ErrorBody)
    )
)]
pub async fn create_comment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service.create_comment(request).await?;
    Ok(Json(response))
}

/// Replace the message of a comment
///
/// PUT /api/comment?author_id=&blog_id=
#[utoipa::path(
    put, path = "/api/comment", tag = "comments",
    params(CommentQueryParams),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Updated comment", body = CommentResponse),
        (status = 400, description = "Validation error or query/body mismatch", body = ErrorBody),
        (status = 404, description = "No such comment", body = ErrorBody)
    )
)]
pub async fn update_comment(
    State(state): State<AppState>,
    query: CommentQuery,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    if query.author_id != request.user_id || query.blog_id != request.blog_id {
        return Err(ApiError::invalid_query(
            "author_id and blog_id must match UserID and BlogID of the body",
        ));
    }

    let service = CommentService::new(state.service_context());
    let response = service.update_comment(request).await?;
    Ok(Json(response))
}

/// Delete a comment; deleting a missing comment succeeds
///
/// DELETE /api/comment?author_id=&blog_id=
#[utoipa::path(
    delete, path = "/api/comment", tag = "comments",
    params(CommentQueryParams),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Missing or malformed id", body = ErrorBody)
    )
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    query: CommentQuery,
) -> ApiResult<Empty> {
    let service = CommentService::new(state.service_context());
    service.delete_comment(query.key()).await?;
    Ok(Empty)
}
