//! Model to record mappers
//!
//! `From<Model> for Record` conversions for rows read back from PostgreSQL.

mod blog;
mod comment;
mod user;
