//! Response Cache - read-through HTTP response caching for axum services
//!
//! Serves repeated GET responses from memory until their TTL expires and lets
//! write endpoints evict stale entries by exact key or path substring.

pub mod api;
pub mod cache;
pub mod config;
pub mod content;
pub mod error;
pub mod middleware;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{InvalidationResult, ResponseCache};
pub use config::Config;
pub use middleware::{CachePolicy, ResponseCacheLayer};
pub use tasks::spawn_sweep_task;
