//! Shared Response Cache Handle
//!
//! Cloneable handle around one process-wide [`CacheStore`]. The same handle is
//! injected into the middleware, the expiry sweep and any route that needs to
//! invalidate after a write.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore, CachedResponse};
use crate::error::Result;

// == Response Cache ==
/// Explicitly constructed cache instance shared by reference counting.
///
/// Every method takes the lock once and never awaits while holding it, so each
/// call is atomic with respect to concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct ResponseCache {
    pub(crate) store: Arc<RwLock<CacheStore>>,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a handle over a fresh, empty store.
    pub fn new() -> Self {
        Self::from_store(CacheStore::new())
    }

    /// Wraps an existing store.
    pub fn from_store(store: CacheStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    // == Lookup ==
    /// Returns the fresh response cached under `key`, if any.
    ///
    /// Takes the write lock because a lookup may expire the entry and always
    /// updates statistics.
    pub async fn lookup(&self, key: &str) -> Option<CachedResponse> {
        self.store.write().await.get(key)
    }

    // == Fill ==
    /// Stores a captured response under `key` for `ttl_seconds`.
    pub async fn fill(&self, key: String, response: CachedResponse, ttl_seconds: u64) -> Result<()> {
        self.store.write().await.set(key, response, ttl_seconds)
    }

    // == Sweep ==
    /// Removes every expired entry and returns how many were dropped.
    pub async fn sweep_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }

    /// Returns all stored keys, including expired entries not yet swept.
    pub async fn keys(&self) -> Vec<String> {
        self.store.read().await.keys()
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}
