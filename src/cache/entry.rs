//! Cache Entry Module
//!
//! Defines the captured response and the TTL-bearing entry that wraps it.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::body::Bytes;
use axum::http::{HeaderValue, StatusCode};

// == Cached Response ==
/// A successful response captured verbatim from a downstream handler.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedResponse {
    /// Status the downstream handler answered with (always 2xx)
    pub status: StatusCode,
    /// `Content-Type` header of the downstream response, if any
    pub content_type: Option<HeaderValue>,
    /// Response body bytes
    pub body: Bytes,
}

impl CachedResponse {
    pub fn new(status: StatusCode, content_type: Option<HeaderValue>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    /// Builds a `200 OK` entry without a content type.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::OK, None, body)
    }

    /// Size of the captured body in bytes.
    pub fn body_len(&self) -> usize {
        self.body.len()
    }
}

// == Cache Entry ==
/// Represents a single cache entry with its expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The captured response
    pub value: CachedResponse,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_seconds` from now.
    pub fn new(value: CachedResponse, ttl_seconds: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            value,
            created_at: now,
            expires_at: now.saturating_add(ttl_seconds.saturating_mul(1000)),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is visible only while `now < expires_at`, so the boundary
    /// instant itself already counts as expired.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, `0` once expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms())
    }

    /// Returns remaining TTL in whole seconds.
    pub fn ttl_remaining(&self) -> u64 {
        self.ttl_remaining_ms() / 1000
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
