//! HTTP request handlers

pub mod blogs;
pub mod comments;
pub mod health;
pub mod users;
