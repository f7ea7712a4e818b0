//! Database models - SQLx-compatible structs for PostgreSQL tables

mod blog;
mod comment;
mod user;

pub use blog::BlogModel;
pub use comment::CommentModel;
pub use user::UserModel;
