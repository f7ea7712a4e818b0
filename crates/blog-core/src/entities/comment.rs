//! Comment entity - one message per (user, blog) pair

use chrono::{DateTime, Utc};

use crate::value_objects::RecordId;

/// Comment record as stored
///
/// Comments have no surrogate key; `(user_id, blog_id)` identifies the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub user_id: RecordId,
    pub blog_id: RecordId,
    pub message: String,
    pub created_date: DateTime<Utc>,
}

impl Comment {
    /// Natural key of the comment
    #[inline]
    pub fn key(&self) -> (RecordId, RecordId) {
        (self.user_id, self.blog_id)
    }
}

/// Values for inserting a comment or replacing its message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub user_id: RecordId,
    pub blog_id: RecordId,
    pub message: String,
}

impl NewComment {
    /// Hydrate into a stored record
    pub fn hydrate(self, created_date: DateTime<Utc>) -> Comment {
        Comment {
            user_id: self.user_id,
            blog_id: self.blog_id,
            message: self.message,
            created_date,
        }
    }
}
