//! Record to DTO mappers
//!
//! Implements `From` conversions from domain records to response DTOs,
//! and flattens validator output into a problem set.

use std::collections::BTreeMap;

use blog_core::entities::{Blog, Comment, User};
use validator::ValidationErrors;

use super::responses::{
    BlogResponse, BlogsResponse, CommentResponse, CommentsResponse, UserResponse, UsersResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

impl From<Vec<User>> for UsersResponse {
    fn from(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(UserResponse::from).collect(),
        }
    }
}

// ============================================================================
// Blog Mappers
// ============================================================================

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id,
            authorid: blog.author_id,
            title: blog.title,
            score: blog.score,
            createddate: blog.created_date,
        }
    }
}

impl From<Vec<Blog>> for BlogsResponse {
    fn from(blogs: Vec<Blog>) -> Self {
        Self {
            blogs: blogs.into_iter().map(BlogResponse::from).collect(),
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            user_id: comment.user_id,
            blog_id: comment.blog_id,
            message: comment.message,
            created_date: comment.created_date,
        }
    }
}

impl From<Vec<Comment>> for CommentsResponse {
    fn from(comments: Vec<Comment>) -> Self {
        Self {
            comments: comments.into_iter().map(CommentResponse::from).collect(),
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Flatten validation errors into field → first message
///
/// Errors without a message fall back to their code.
pub fn problem_set(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errors)| {
            errors.first().map(|error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                (field.to_string(), message)
            })
        })
        .collect()
}
