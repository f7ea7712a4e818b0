//! OpenAPI document and Swagger UI

use blog_service::{
    BlogRequest, BlogResponse, BlogsResponse, CommentRequest, CommentResponse, CommentsResponse,
    HealthResponse, ReadinessResponse, UserRequest, UserResponse, UsersResponse,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{blogs, comments, health, users};
use crate::response::{ErrorBody, ErrorDetail};

/// Path of the served OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Path of the Swagger UI
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    info(title = "Blog API", description = "Users, blogs and comments"),
    paths(
        health::health_check,
        health::readiness_check,
        users::get_user,
        users::list_users,
        users::create_user,
        users::update_user,
        users::delete_user,
        blogs::get_blog,
        blogs::list_blogs,
        blogs::create_blog,
        blogs::update_blog,
        blogs::delete_blog,
        comments::list_comments,
        comments::create_comment,
        comments::update_comment,
        comments::delete_comment,
    ),
    components(
        schemas(
            UserRequest,
            UserResponse,
            UsersResponse,
            BlogRequest,
            BlogResponse,
            BlogsResponse,
            CommentRequest,
            CommentResponse,
            CommentsResponse,
            HealthResponse,
            ReadinessResponse,
            ErrorBody,
            ErrorDetail,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "blogs"),
        (name = "comments")
    )
)]
pub struct ApiDoc;

/// Swagger UI serving the generated document
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}
