//! # blog-db
//!
//! Storage layer implementing the blog-core ports.
//!
//! ## Overview
//!
//! - Connection pool management and the table schema
//! - Database models with SQLx `FromRow` derives
//! - Model → record mappers
//! - `PgStore`, one PostgreSQL transaction per session
//! - `MemoryStore`, an in-process store with the same transactional contract
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blog_db::{create_pool, DatabaseConfig, PgStore};
//! use blog_core::traits::{Store, UserReader};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     let store = PgStore::new(pool);
//!
//!     let mut session = store.begin().await?;
//!     let users = session.list_users().await?;
//!     session.commit().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryStore, Operation};
pub use pool::{apply_schema, create_pool, DatabaseConfig, PgPool};
pub use repositories::{PgSession, PgStore};
