//! Cache invalidation by exact key, by path substring, or wholesale.
//!
//! The cache knows nothing about how resources relate to each other; a write
//! endpoint decides which keys its mutation made stale and calls these.

use serde::Serialize;
use tracing::{debug, info};

use crate::cache::ResponseCache;

/// Outcome of an invalidation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidationResult {
    /// Number of entries removed.
    pub count: usize,
    /// Key or substring that was applied; `None` for a full clear.
    pub pattern: Option<String>,
}

impl ResponseCache {
    /// Removes the entry stored under exactly `key`.
    ///
    /// Invalidating a key that is not cached is a no-op.
    pub async fn invalidate_exact(&self, key: &str) -> InvalidationResult {
        let removed = self.store.write().await.delete(key);
        let count = usize::from(removed);

        debug!(key = %key, removed = removed, "Exact cache invalidation");

        InvalidationResult {
            count,
            pattern: Some(key.to_string()),
        }
    }

    /// Removes the entry for `path` and every query-string variant of it.
    ///
    /// `/api/content-blocks` drops `/api/content-blocks?page=2` but keeps
    /// `/api/content-blocks/7`, which is a different resource.
    pub async fn invalidate_path(&self, path: &str) -> InvalidationResult {
        let query_prefix = format!("{}?", path);
        let mut count = 0;
        {
            let mut store = self.store.write().await;
            for key in store.keys() {
                if (key == path || key.starts_with(&query_prefix)) && store.delete(&key) {
                    count += 1;
                }
            }
        }

        debug!(path = %path, count = count, "Path cache invalidation");

        InvalidationResult {
            count,
            pattern: Some(path.to_string()),
        }
    }

    /// Removes every entry whose key contains `pattern` anywhere.
    ///
    /// Plain substring match: `/api/users` also matches `/api/users-archive`.
    /// Expired entries not yet swept are scanned and removed as well.
    ///
    /// ```no_run
    /// # use response_cache::cache::ResponseCache;
    /// # #[tokio::main]
    /// # async fn main() {
    /// # let cache = ResponseCache::new();
    /// // Drops `/api/skill-tree/nodes?sportType=Basketball` and
    /// // `/api/skill-tree/nodes/4/children` alike
    /// let result = cache.invalidate_by_pattern("/api/skill-tree/nodes").await;
    /// println!("Invalidated {} entries", result.count);
    /// # }
    /// ```
    pub async fn invalidate_by_pattern(&self, pattern: &str) -> InvalidationResult {
        let mut count = 0;
        {
            let mut store = self.store.write().await;
            for key in store.keys() {
                if key.contains(pattern) && store.delete(&key) {
                    count += 1;
                }
            }
        }

        if count > 0 {
            info!(pattern = %pattern, count = count, "Cache entries invalidated by pattern");
        } else {
            debug!(pattern = %pattern, "No cache entries matched pattern");
        }

        InvalidationResult {
            count,
            pattern: Some(pattern.to_string()),
        }
    }

    /// Empties the whole cache. Safe to call repeatedly.
    pub async fn clear_all(&self) -> InvalidationResult {
        let count = self.store.write().await.clear();

        info!(count = count, "Response cache cleared");

        InvalidationResult {
            count,
            pattern: None,
        }
    }
}
