//! Repository implementations
//!
//! PostgreSQL implementations of the storage ports defined in blog-core.
//! `PgStore` hands out `PgSession`s, one per transaction; the per-table
//! modules implement the reader and writer ports on the session.

mod blog;
mod comment;
mod error;
mod session;
mod user;

pub use session::{PgSession, PgStore};
