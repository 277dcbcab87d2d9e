//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::cache::{DEFAULT_CHECK_PERIOD_SECS, DEFAULT_STATIC_TTL_SECS, DEFAULT_TTL_SECS};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL in seconds for cached API responses
    pub cache_ttl: u64,
    /// TTL in seconds for the static catalogue route group
    pub static_cache_ttl: u64,
    /// Interval in seconds between expiry sweeps
    pub check_period: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Simulated content store latency in milliseconds
    pub content_latency_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Response TTL in seconds (default: 300)
    /// - `CACHE_STATIC_TTL` - Catalogue TTL in seconds (default: 3600)
    /// - `CACHE_CHECK_PERIOD` - Sweep frequency in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CONTENT_LATENCY_MS` - Simulated content store latency (default: 0)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            static_cache_ttl: parse_var("CACHE_STATIC_TTL").unwrap_or(defaults.static_cache_ttl),
            check_period: parse_var("CACHE_CHECK_PERIOD").unwrap_or(defaults.check_period),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            content_latency_ms: parse_var("CONTENT_LATENCY_MS")
                .unwrap_or(defaults.content_latency_ms),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_TTL_SECS,
            static_cache_ttl: DEFAULT_STATIC_TTL_SECS,
            check_period: DEFAULT_CHECK_PERIOD_SECS,
            server_port: 3000,
            content_latency_ms: 0,
        }
    }
}
