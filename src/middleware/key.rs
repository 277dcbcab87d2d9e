//! Cache key derivation.

use axum::http::Uri;

/// Builds the cache key for a request URI: its path plus query string,
/// exactly as received.
///
/// Query parameters are not reordered, so `/a?x=1&y=2` and `/a?y=2&x=1`
/// land in different entries.
pub fn cache_key(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}
