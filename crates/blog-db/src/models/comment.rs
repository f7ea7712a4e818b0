//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub user_id: i64,
    pub blog_id: i64,
    pub message: String,
    pub created_date: DateTime<Utc>,
}
