//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::RecordId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(RecordId),

    #[error("Blog not found: {0}")]
    BlogNotFound(RecordId),

    #[error("Comment not found for user {user_id} on blog {blog_id}")]
    CommentNotFound { user_id: RecordId, blog_id: RecordId },

    // =========================================================================
    // Reference Errors (a referenced row is missing)
    // =========================================================================
    #[error("Author does not exist: {0}")]
    UnknownAuthor(RecordId),

    #[error("User does not exist: {0}")]
    UnknownUser(RecordId),

    #[error("Blog does not exist: {0}")]
    UnknownBlog(RecordId),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User {user_id} already commented on blog {blog_id}")]
    CommentAlreadyExists { user_id: RecordId, blog_id: RecordId },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::BlogNotFound(_) => "BLOG_NOT_FOUND",
            Self::CommentNotFound { .. } => "COMMENT_NOT_FOUND",

            // Reference
            Self::UnknownAuthor(_) => "UNKNOWN_AUTHOR",
            Self::UnknownUser(_) => "UNKNOWN_USER",
            Self::UnknownBlog(_) => "UNKNOWN_BLOG",

            // Conflict
            Self::CommentAlreadyExists { .. } => "COMMENT_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::BlogNotFound(_) | Self::CommentNotFound { .. }
        )
    }

    /// Check if a row the request points at is missing
    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            Self::UnknownAuthor(_) | Self::UnknownUser(_) | Self::UnknownBlog(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::CommentAlreadyExists { .. })
    }
}
