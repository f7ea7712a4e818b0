//! Blog entity - a titled, scored post owned by a user

use chrono::{DateTime, Utc};

use crate::value_objects::RecordId;

/// Blog record as stored
#[derive(Debug, Clone, PartialEq)]
pub struct Blog {
    pub id: RecordId,
    pub author_id: RecordId,
    pub title: String,
    pub score: f32,
    /// Assigned by the store on insert, never changed by an update
    pub created_date: DateTime<Utc>,
}

impl Blog {
    /// Exact title match; an empty filter matches every blog
    pub fn matches_title(&self, filter: &str) -> bool {
        filter.is_empty() || self.title == filter
    }

    /// Check if the blog was written by the given user
    #[inline]
    pub fn is_authored_by(&self, user_id: RecordId) -> bool {
        self.author_id == user_id
    }
}

/// Values for inserting a blog or fully replacing the mutable fields of one
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlog {
    pub author_id: RecordId,
    pub title: String,
    pub score: f32,
}

impl NewBlog {
    /// Hydrate into a stored record
    pub fn hydrate(self, id: RecordId, created_date: DateTime<Utc>) -> Blog {
        Blog {
            id,
            author_id: self.author_id,
            title: self.title,
            score: self.score,
            created_date,
        }
    }
}
