//! Cache Module
//!
//! In-memory response storage with TTL expiration, plus the shared handle
//! that the middleware reads through and write endpoints invalidate through.

mod entry;
mod invalidation;
mod response_cache;
mod stats;
mod store;


// Re-export public types
pub use entry::{CacheEntry, CachedResponse};
pub use invalidation::InvalidationResult;
pub use response_cache::ResponseCache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes (path plus query string)
pub const MAX_KEY_LENGTH: usize = 2048;

/// Maximum cacheable response body size in bytes
pub const MAX_VALUE_SIZE: usize = 10 * 1024 * 1024; // 10 MB

/// Default response TTL in seconds
pub const DEFAULT_TTL_SECS: u64 = 300;

/// Default TTL in seconds for rarely changing catalogue responses
pub const DEFAULT_STATIC_TTL_SECS: u64 = 3600;

/// Default interval between expiry sweeps in seconds
pub const DEFAULT_CHECK_PERIOD_SECS: u64 = 60;
