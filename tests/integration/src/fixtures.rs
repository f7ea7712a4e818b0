//! Test fixtures and data generators
//!
//! Wire shapes as a client sees them.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// User create/update body
#[derive(Debug, Clone, Serialize)]
pub struct UserBody {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("user{suffix}"),
            email: format!("user{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// User as returned by the API
#[derive(Debug, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct Users {
    #[serde(rename = "Users")]
    pub users: Vec<User>,
}

/// Blog create/update body
#[derive(Debug, Clone, Serialize)]
pub struct BlogBody {
    pub authorid: i64,
    pub title: String,
    pub score: f32,
}

impl BlogBody {
    pub fn new(authorid: i64, title: &str, score: f32) -> Self {
        Self {
            authorid,
            title: title.to_string(),
            score,
        }
    }

    pub fn unique(authorid: i64) -> Self {
        Self::new(authorid, &format!("Blog {}", unique_suffix()), 7.5)
    }
}

/// Blog as returned by the API
#[derive(Debug, PartialEq, Deserialize)]
pub struct Blog {
    pub id: i64,
    pub authorid: i64,
    pub title: String,
    pub score: f32,
    pub createddate: String,
}

#[derive(Debug, Deserialize)]
pub struct Blogs {
    #[serde(rename = "Blogs")]
    pub blogs: Vec<Blog>,
}

/// Comment create/update body
#[derive(Debug, Clone, Serialize)]
pub struct CommentBody {
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "BlogID")]
    pub blog_id: i64,
    #[serde(rename = "Message")]
    pub message: String,
}

impl CommentBody {
    pub fn new(user_id: i64, blog_id: i64, message: &str) -> Self {
        Self {
            user_id,
            blog_id,
            message: message.to_string(),
        }
    }
}

/// Comment as returned by the API
#[derive(Debug, Deserialize)]
pub struct Comment {
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "BlogID")]
    pub blog_id: i64,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "CreatedDate")]
    pub created_date: String,
}

#[derive(Debug, Deserialize)]
pub struct Comments {
    #[serde(rename = "Comments")]
    pub comments: Vec<Comment>,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
