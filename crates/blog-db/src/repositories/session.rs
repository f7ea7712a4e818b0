//! PostgreSQL implementation of Store and Session

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use blog_core::traits::{RepoResult, Session, Store};

use super::error::map_db_error;

/// PostgreSQL implementation of Store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a new PgStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    #[instrument(skip(self))]
    async fn begin(&self) -> RepoResult<Box<dyn Session>> {
        let tx = self.pool.begin().await.map_err(map_db_error)?;
        Ok(Box::new(PgSession { tx }))
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}

/// One PostgreSQL transaction
///
/// SQLx rolls the transaction back when it is dropped uncommitted.
pub struct PgSession {
    pub(super) tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl Session for PgSession {
    #[instrument(skip(self))]
    async fn commit(self: Box<Self>) -> RepoResult<()> {
        let Self { tx } = *self;
        tx.commit().await.map_err(map_db_error)
    }
}
