//! # blog-service
//!
//! Application layer containing request validation, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    BlogRequest, BlogResponse, BlogsResponse, CommentKey, CommentRequest, CommentResponse,
    CommentsResponse, HealthResponse, ReadinessResponse, UserRequest, UserResponse, UsersResponse,
};
pub use services::{
    BlogService, CommentService, ServiceContext, ServiceError, ServiceResult, UserService,
};
