//! Route definitions
//!
//! Resource routes are mounted under /api; health probes live at the root.

use axum::{routing::get, Router};

use crate::handlers::{blogs, comments, health, users};
use crate::state::AppState;

/// Create the router for every resource route
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(blog_routes())
        .merge(comment_routes())
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(users::list_users).post(users::create_user))
        .route(
            "/user/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}

/// Blog routes
fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blog", get(blogs::list_blogs).post(blogs::create_blog))
        .route(
            "/blog/:id",
            get(blogs::get_blog)
                .put(blogs::update_blog)
                .delete(blogs::delete_blog),
        )
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new().route(
        "/comment",
        get(comments::list_comments)
            .post(comments::create_comment)
            .put(comments::update_comment)
            .delete(comments::delete_comment),
    )
}
