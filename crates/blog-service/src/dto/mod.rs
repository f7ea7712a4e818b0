//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers from records to DTOs and from validation errors to problem sets

pub mod mappers;
pub mod requests;
pub mod responses;

pub use mappers::problem_set;
pub use requests::{BlogRequest, CommentKey, CommentRequest, UserRequest};
pub use responses::{
    BlogResponse, BlogsResponse, CommentResponse, CommentsResponse, HealthChecks, HealthResponse,
    ReadinessResponse, UserResponse, UsersResponse,
};
