//! User handlers
//!
//! Endpoints for user accounts. Responses never carry the password.

use axum::{
    extract::{Query, State},
    Json,
};
use blog_service::{UserRequest, UserResponse, UserService, UsersResponse};

use crate::extractors::{IdPath, NameFilter, ValidatedJson};
use crate::response::{ApiResult, Empty, ErrorBody};
use crate::state::AppState;

/// Get user by ID
///
/// GET /api/user/{id}
#[utoipa::path(
    get, path = "/api/user/{id}", tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 404, description = "No such user", body = ErrorBody)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(Json(response))
}

/// List users, optionally by exact name
///
/// GET /api/user
#[utoipa::path(
    get, path = "/api/user", tag = "users",
    params(NameFilter),
    responses((status = 200, description = "Users", body = UsersResponse))
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(filter): Query<NameFilter>,
) -> ApiResult<Json<UsersResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.list_users(&filter.name).await?;
    Ok(Json(response))
}

/// Create user
///
/// POST /api/user
#[utoipa::path(
    post, path = "/api/user", tag = "users",
    request_body = UserRequest,
    responses(
        (status = 200, description = "Created user", body = UserResponse),
        (status = 400, description = "Validation error", body = ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.create_user(request).await?;
    Ok(Json(response))
}

/// Replace a user
///
/// PUT /api/user/{id}
#[utoipa::path(
    put, path = "/api/user/{id}", tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 404, description = "No such user", body = ErrorBody)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_user(user_id, request).await?;
    Ok(Json(response))
}

/// Delete a user with their blogs and comments
///
/// DELETE /api/user/{id}
#[utoipa::path(
    delete, path = "/api/user/{id}", tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "No such user", body = ErrorBody)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> ApiResult<Empty> {
    let service = UserService::new(state.service_context());
    service.delete_user(user_id).await?;
    Ok(Empty)
}
