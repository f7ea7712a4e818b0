//! Service context - dependency container for services
//!
//! Holds the storage handle and the password hasher.

use std::sync::Arc;

use blog_common::PasswordService;
use blog_core::traits::Store;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    store: Arc<dyn Store>,
    passwords: PasswordService,
}

impl ServiceContext {
    /// Create a new service context over a store
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            passwords: PasswordService::new(),
        }
    }

    /// Get the storage handle
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Get the password hasher
    pub fn passwords(&self) -> &PasswordService {
        &self.passwords
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("store", &"dyn Store")
            .finish()
    }
}
