//! # blog-core
//!
//! Domain layer containing records, value objects, storage ports, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Blog, Comment, NewBlog, NewComment, NewUser, User};
pub use error::DomainError;
pub use traits::{
    BlogReader, BlogWriter, CommentFilter, CommentReader, CommentWriter, RepoResult, Session,
    Store, UserReader, UserWriter,
};
pub use value_objects::{RecordId, RecordIdParseError};
