//! Domain records - plain data holders passed by value between layers

mod blog;
mod comment;
mod user;

pub use blog::{Blog, NewBlog};
pub use comment::{Comment, NewComment};
pub use user::{NewUser, User};
