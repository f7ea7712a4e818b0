//! In-memory implementation of the storage ports
//!
//! Used by the test suites and by local runs with `STORAGE_BACKEND=memory`.
//! Sessions are serialized: each one holds the table lock for its whole
//! lifetime, writes go to a private working copy, and only a commit
//! publishes that copy. Dropping a session discards its writes.

mod faults;
mod session;

pub use faults::Operation;
pub use session::MemorySession;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Mutex as AsyncMutex;
use tracing::instrument;

use blog_core::entities::{Blog, Comment, User};
use blog_core::traits::{RepoResult, Session, Store};

use faults::FaultSet;

/// Row storage shared by every session
#[derive(Debug, Clone, Default)]
pub(crate) struct Tables {
    pub(crate) users: BTreeMap<i64, User>,
    pub(crate) blogs: BTreeMap<i64, Blog>,
    /// Keyed by (blog_id, user_id) so iteration follows the listing order
    pub(crate) comments: BTreeMap<(i64, i64), Comment>,
    pub(crate) last_user_id: i64,
    pub(crate) last_blog_id: i64,
}

/// In-memory Store
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<AsyncMutex<Tables>>,
    faults: Arc<Mutex<FaultSet>>,
    begins: Arc<AtomicU64>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later call of `op` fail with a database error
    pub fn fail_on(&self, op: Operation) {
        self.faults.lock().insert(op);
    }

    /// Stop failing `op`
    pub fn clear_fault(&self, op: Operation) {
        self.faults.lock().remove(op);
    }

    /// Number of sessions opened so far
    pub fn begin_count(&self) -> u64 {
        self.begins.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Store for MemoryStore {
    #[instrument(skip(self))]
    async fn begin(&self) -> RepoResult<Box<dyn Session>> {
        self.begins.fetch_add(1, Ordering::SeqCst);
        self.faults.lock().check(Operation::Begin)?;

        let guard = Arc::clone(&self.tables).lock_owned().await;
        Ok(Box::new(MemorySession::new(guard, Arc::clone(&self.faults))))
    }

    async fn ping(&self) -> RepoResult<()> {
        self.faults.lock().check(Operation::Ping)
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("begins", &self.begin_count())
            .finish_non_exhaustive()
    }
}
