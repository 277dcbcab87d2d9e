//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::{ResponseCache, DEFAULT_STATIC_TTL_SECS, DEFAULT_TTL_SECS};
use crate::config::Config;
use crate::content::ContentRepository;

/// Application state shared across all handlers.
///
/// The same [`ResponseCache`] handle is given to the cache layers and to the
/// write handlers that invalidate it.
#[derive(Clone)]
pub struct AppState {
    /// Response cache shared with the middleware
    pub cache: ResponseCache,
    /// Thread-safe content store
    pub content: Arc<RwLock<ContentRepository>>,
    /// TTL for the dynamic API route group
    pub cache_ttl: u64,
    /// TTL for the static catalogue route group
    pub static_cache_ttl: u64,
    /// Simulated content store latency applied on every read
    pub latency: Duration,
}

impl AppState {
    /// Creates a new AppState with default TTLs and no simulated latency.
    pub fn new(cache: ResponseCache, content: ContentRepository) -> Self {
        Self {
            cache,
            content: Arc::new(RwLock::new(content)),
            cache_ttl: DEFAULT_TTL_SECS,
            static_cache_ttl: DEFAULT_STATIC_TTL_SECS,
            latency: Duration::ZERO,
        }
    }

    /// Creates a new AppState from configuration with a seeded content store.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ResponseCache::new(), ContentRepository::seeded())
            .with_ttls(config.cache_ttl, config.static_cache_ttl)
            .with_latency(Duration::from_millis(config.content_latency_ms))
    }

    pub fn with_ttls(mut self, cache_ttl: u64, static_cache_ttl: u64) -> Self {
        self.cache_ttl = cache_ttl;
        self.static_cache_ttl = static_cache_ttl;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Waits out the configured content store latency.
    pub(crate) async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}
