//! Axum extractors for request handling
//!
//! Custom extractors for record ids, comment keys, and validated bodies.

mod path;
mod query;
mod validated;

pub use path::IdPath;
pub use query::{CommentQuery, CommentQueryParams, NameFilter, TitleFilter};
pub use validated::ValidatedJson;
