//! Blog database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for blogs table
#[derive(Debug, Clone, FromRow)]
pub struct BlogModel {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub score: f32,
    pub created_date: DateTime<Utc>,
}
