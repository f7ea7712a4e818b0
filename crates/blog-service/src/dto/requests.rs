//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate`. A request that
//! fails validation never reaches storage.

use std::borrow::Cow;

use blog_core::RecordId;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

const TITLE_MAX_CHARS: usize = 100;
const MESSAGE_MAX_CHARS: usize = 500;
const NAME_MAX_CHARS: usize = 100;
const PASSWORD_MAX_CHARS: usize = 72;

/// Reject the unset id
fn validate_record_id(id: &RecordId) -> Result<(), ValidationError> {
    if id.is_unset() {
        Err(ValidationError::new("nonzero"))
    } else {
        Ok(())
    }
}

/// Non-empty text of at most `max` code points, with a message for each failure
fn bounded_text(
    value: &str,
    max: usize,
    empty: &'static str,
    too_long: &'static str,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::new("length").with_message(Cow::Borrowed(empty)))
    } else if value.chars().count() > max {
        Err(ValidationError::new("length").with_message(Cow::Borrowed(too_long)))
    } else {
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    bounded_text(
        title,
        TITLE_MAX_CHARS,
        "Title cannot be empty",
        "Title cannot be greater than 100 characters",
    )
}

fn validate_message(message: &str) -> Result<(), ValidationError> {
    bounded_text(
        message,
        MESSAGE_MAX_CHARS,
        "Message cannot be empty",
        "Message cannot be greater than 500 characters",
    )
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    bounded_text(
        name,
        NAME_MAX_CHARS,
        "Name cannot be empty",
        "Name cannot be greater than 100 characters",
    )
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    bounded_text(
        password,
        PASSWORD_MAX_CHARS,
        "Password cannot be empty",
        "Password cannot be greater than 72 characters",
    )
}

// ============================================================================
// User Requests
// ============================================================================

/// Create or replace a user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserRequest {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Stored only as an Argon2 hash
    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

// ============================================================================
// Blog Requests
// ============================================================================

/// Create or replace a blog
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BlogRequest {
    #[validate(custom(function = "validate_record_id", message = "Invalid AuthorId"))]
    #[schema(value_type = i64, example = 1)]
    pub authorid: RecordId,

    #[validate(custom(function = "validate_title"))]
    #[schema(example = "Book Title")]
    pub title: String,

    #[validate(range(
        min = 0.0,
        max = 10.0,
        message = "Score cannot be less than 0 or greater than 10"
    ))]
    #[schema(example = 8.2)]
    pub score: f32,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create a comment, or replace the message of an existing one
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CommentRequest {
    #[serde(rename = "UserID")]
    #[validate(custom(function = "validate_record_id", message = "Invalid UserId"))]
    #[schema(value_type = i64)]
    pub user_id: RecordId,

    #[serde(rename = "BlogID")]
    #[validate(custom(function = "validate_record_id", message = "Invalid BlogId"))]
    #[schema(value_type = i64)]
    pub blog_id: RecordId,

    #[serde(rename = "Message")]
    #[validate(custom(function = "validate_message"))]
    pub message: String,
}

/// Natural key of a comment as given in a query string
#[derive(Debug, Clone, Copy, Default, Validate)]
pub struct CommentKey {
    #[validate(custom(function = "validate_record_id", message = "Invalid UserId"))]
    pub author_id: RecordId,

    #[validate(custom(function = "validate_record_id", message = "Invalid BlogId"))]
    pub blog_id: RecordId,
}

impl CommentKey {
    pub fn new(author_id: RecordId, blog_id: RecordId) -> Self {
        Self { author_id, blog_id }
    }
}
