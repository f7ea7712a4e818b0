//! Response DTOs for API endpoints
//!
//! Field names follow the wire format clients already use: blogs are all
//! lowercase, comments are PascalCase, list bodies wrap the array in a
//! named object.

use blog_core::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// User Responses
// ============================================================================

/// User as returned to clients; the password hash is never exposed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(value_type = i64)]
    pub id: RecordId,
    pub name: String,
    pub email: String,
}

/// GET /api/user body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    #[serde(rename = "Users")]
    pub users: Vec<UserResponse>,
}

// ============================================================================
// Blog Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BlogResponse {
    #[schema(value_type = i64)]
    pub id: RecordId,
    #[schema(value_type = i64)]
    pub authorid: RecordId,
    pub title: String,
    pub score: f32,
    pub createddate: DateTime<Utc>,
}

/// GET /api/blog body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlogsResponse {
    #[serde(rename = "Blogs")]
    pub blogs: Vec<BlogResponse>,
}

// ============================================================================
// Comment Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    #[serde(rename = "UserID")]
    #[schema(value_type = i64)]
    pub user_id: RecordId,
    #[serde(rename = "BlogID")]
    #[schema(value_type = i64)]
    pub blog_id: RecordId,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "CreatedDate")]
    pub created_date: DateTime<Utc>,
}

/// GET /api/comment body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentsResponse {
    #[serde(rename = "Comments")]
    pub comments: Vec<CommentResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health of each dependency
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthChecks {
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(storage_healthy: bool) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
