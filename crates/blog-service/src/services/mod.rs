//! Application services
//!
//! Each service borrows the shared [`ServiceContext`] and runs every
//! operation inside a single storage session.

pub mod blog;
pub mod comment;
pub mod context;
pub mod error;
pub(crate) mod lookups;
pub mod user;

pub use blog::BlogService;
pub use comment::CommentService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use user::UserService;
