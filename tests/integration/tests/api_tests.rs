//! API Integration Tests
//!
//! Each test spawns its own server over an in-memory store. The PostgreSQL
//! smoke test additionally needs DATABASE_URL.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;

async fn create_user(server: &TestServer) -> User {
    let response = server.post("/api/user", &UserBody::unique()).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn create_blog(server: &TestServer, author: i64) -> Blog {
    let response = server
        .post("/api/blog", &BlogBody::unique(author))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn list_comments(server: &TestServer, query: &str) -> Vec<Comment> {
    let response = server.get(&format!("/api/comment{query}")).await.unwrap();
    let comments: Comments = assert_json(response, StatusCode::OK).await.unwrap();
    comments.comments
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_request_id_header() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_user() {
    let server = TestServer::start().await.unwrap();
    let body = UserBody::unique();

    let response = server.post("/api/user", &body).await.unwrap();
    let created: User = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, body.name);

    let response = server
        .get(&format!("/api/user/{}", created.id))
        .await
        .unwrap();
    let text = response.text().await.unwrap();
    assert!(!text.contains("password"));
    assert!(!text.contains(&body.password));
}

#[tokio::test]
async fn test_create_user_with_bad_email() {
    let server = TestServer::start().await.unwrap();
    let mut body = UserBody::unique();
    body.email = "not-an-email".to_string();

    let response = server.post("/api/user", &body).await.unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "VALIDATION_ERROR");
    assert_eq!(
        err.error.details.unwrap()["email"],
        "Invalid email format"
    );
}

#[tokio::test]
async fn test_list_users_by_name() {
    let server = TestServer::start().await.unwrap();
    let first = create_user(&server).await;
    create_user(&server).await;

    let response = server.get("/api/user").await.unwrap();
    let all: Users = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.users.len(), 2);

    let response = server
        .get(&format!("/api/user?name={}", first.name))
        .await
        .unwrap();
    let named: Users = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(named.users.len(), 1);
    assert_eq!(named.users[0].id, first.id);
}

#[tokio::test]
async fn test_update_missing_user() {
    let server = TestServer::start().await.unwrap();
    let response = server.put("/api/user/99", &UserBody::unique()).await.unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_delete_user_cascades() {
    let server = TestServer::start().await.unwrap();
    let author = create_user(&server).await;
    let reader = create_user(&server).await;
    let own_blog = create_blog(&server, author.id).await;
    let other_blog = create_blog(&server, reader.id).await;

    for (user, blog) in [
        (author.id, other_blog.id),
        (reader.id, own_blog.id),
        (reader.id, other_blog.id),
    ] {
        let response = server
            .post("/api/comment", &CommentBody::new(user, blog, "hello"))
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .delete(&format!("/api/user/{}", author.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/blog/{}", own_blog.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let remaining = list_comments(&server, "").await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].user_id, reader.id);
    assert_eq!(remaining[0].blog_id, other_blog.id);
}

// ============================================================================
// Blog Tests
// ============================================================================

#[tokio::test]
async fn test_create_blog_then_read() {
    let server = TestServer::start().await.unwrap();
    let author = create_user(&server).await;

    let response = server
        .post("/api/blog", &BlogBody::new(author.id, "Book Title", 8.2))
        .await
        .unwrap();
    let created: Blog = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.authorid, author.id);
    assert!((created.score - 8.2).abs() < f32::EPSILON);

    let response = server
        .get(&format!("/api/blog/{}", created.id))
        .await
        .unwrap();
    let read: Blog = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(read, created);
}

#[tokio::test]
async fn test_blog_score_out_of_range() {
    let server = TestServer::start().await.unwrap();
    let author = create_user(&server).await;

    for score in [-0.5, 10.5] {
        let response = server
            .post("/api/blog", &BlogBody::new(author.id, "Title", score))
            .await
            .unwrap();
        let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(
            err.error.details.unwrap()["score"],
            "Score cannot be less than 0 or greater than 10"
        );
    }
}

#[tokio::test]
async fn test_update_blog_keeps_created_date() {
    let server = TestServer::start().await.unwrap();
    let author = create_user(&server).await;
    let blog = create_blog(&server, author.id).await;

    let response = server
        .put(
            &format!("/api/blog/{}", blog.id),
            &BlogBody::new(author.id, "Renamed", 2.0),
        )
        .await
        .unwrap();
    let updated: Blog = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.createddate, blog.createddate);
}

#[tokio::test]
async fn test_list_blogs_by_title() {
    let server = TestServer::start().await.unwrap();
    let author = create_user(&server).await;
    for title in ["Rust", "Go", "Rust"] {
        let response = server
            .post("/api/blog", &BlogBody::new(author.id, title, 5.0))
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get("/api/blog?title=Rust").await.unwrap();
    let blogs: Blogs = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(blogs.blogs.len(), 2);

    let response = server.get("/api/blog").await.unwrap();
    let blogs: Blogs = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(blogs.blogs.len(), 3);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_flow() {
    let server = TestServer::start().await.unwrap();
    let user = create_user(&server).await;
    let blog = create_blog(&server, user.id).await;

    let response = server
        .post("/api/comment", &CommentBody::new(user.id, blog.id, "First!"))
        .await
        .unwrap();
    let created: Comment = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(created.message, "First!");

    let response = server
        .post("/api/comment", &CommentBody::new(user.id, blog.id, "Second"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let key = format!("?author_id={}&blog_id={}", user.id, blog.id);
    let response = server
        .put(
            &format!("/api/comment{key}"),
            &CommentBody::new(user.id, blog.id, "Edited"),
        )
        .await
        .unwrap();
    let updated: Comment = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.message, "Edited");
    assert_eq!(updated.created_date, created.created_date);

    let response = server.delete(&format!("/api/comment{key}")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert!(list_comments(&server, &key).await.is_empty());
}

#[tokio::test]
async fn test_comment_on_unknown_blog() {
    let server = TestServer::start().await.unwrap();
    let user = create_user(&server).await;

    let response = server
        .post("/api/comment", &CommentBody::new(user.id, 404, "hi"))
        .await
        .unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_BLOG");
}

// ============================================================================
// PostgreSQL
// ============================================================================

#[tokio::test]
async fn test_postgres_round_trip() {
    let Some(server) = TestServer::start_postgres().await.unwrap() else {
        return;
    };
    let author = create_user(&server).await;
    let blog = create_blog(&server, author.id).await;

    let response = server
        .get(&format!("/api/blog/{}", blog.id))
        .await
        .unwrap();
    let read: Blog = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(read.id, blog.id);

    let response = server
        .delete(&format!("/api/user/{}", author.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
