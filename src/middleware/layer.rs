//! Read-through response cache middleware.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use axum::{
    body::{to_bytes, Body, HttpBody},
    http::{
        header::{CACHE_CONTROL, CONTENT_LENGTH, CONTENT_TYPE},
        HeaderValue, Request, Response, StatusCode,
    },
    response::IntoResponse,
};
use tower::{Layer, Service};
use tracing::{debug, warn};

use super::key::cache_key;
use super::policy::{CacheDecision, CachePolicy};
use crate::cache::{CachedResponse, ResponseCache, DEFAULT_TTL_SECS, MAX_VALUE_SIZE};

/// Layer that caches successful GET responses in a [`ResponseCache`].
///
/// Each layer carries its own TTL, so route groups can share one cache while
/// expiring at different rates.
#[derive(Clone, Debug)]
pub struct ResponseCacheLayer {
    cache: ResponseCache,
    policy: CachePolicy,
    ttl_seconds: u64,
}

impl ResponseCacheLayer {
    /// Creates a layer with the default 300 second TTL and an anonymous policy.
    pub fn new(cache: ResponseCache) -> Self {
        Self {
            cache,
            policy: CachePolicy::default(),
            ttl_seconds: DEFAULT_TTL_SECS,
        }
    }

    pub fn with_ttl(mut self, ttl_seconds: u64) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }

    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn ttl(&self) -> u64 {
        self.ttl_seconds
    }
}

impl<S> Layer<S> for ResponseCacheLayer {
    type Service = ResponseCacheService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ResponseCacheService {
            inner,
            cache: self.cache.clone(),
            policy: self.policy.clone(),
            ttl_seconds: self.ttl_seconds,
        }
    }
}

/// Middleware that answers hits from memory and fills the cache on misses.
#[derive(Clone, Debug)]
pub struct ResponseCacheService<S> {
    inner: S,
    cache: ResponseCache,
    policy: CachePolicy,
    ttl_seconds: u64,
}

impl<S> Service<Request<Body>> for ResponseCacheService<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        // Take the service that was driven to readiness, leave a clone behind
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        if let CacheDecision::Bypass(reason) = self.policy.evaluate(&request) {
            debug!(path = %request.uri().path(), reason = ?reason, "Cache bypassed");
            return Box::pin(inner.call(request));
        }

        let key = cache_key(request.uri());
        let cache = self.cache.clone();
        let ttl_seconds = self.ttl_seconds;

        Box::pin(async move {
            if let Some(cached) = cache.lookup(&key).await {
                debug!(key = %key, "Cache hit");
                return Ok(hit_response(cached, ttl_seconds));
            }

            debug!(key = %key, "Cache miss");
            let response = inner.call(request).await?;

            if !response.status().is_success() {
                return Ok(response);
            }

            if exceeds_cache_limit(&response) {
                debug!(key = %key, "Response too large to cache, streaming through");
                return Ok(response);
            }

            Ok(capture(response, &cache, key, ttl_seconds).await)
        })
    }
}

/// Rebuilds a response from a cached entry and marks it publicly cacheable.
fn hit_response(cached: CachedResponse, ttl_seconds: u64) -> Response<Body> {
    let mut response = Response::new(Body::from(cached.body));
    *response.status_mut() = cached.status;

    let headers = response.headers_mut();
    if let Some(content_type) = cached.content_type {
        headers.insert(CONTENT_TYPE, content_type);
    }
    if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={}", ttl_seconds)) {
        headers.insert(CACHE_CONTROL, value);
    }

    response
}

/// Returns true when the declared body size already rules out caching.
///
/// Checks both `Content-Length` and the body's own size hint, so such
/// responses are forwarded without being buffered.
fn exceeds_cache_limit(response: &Response<Body>) -> bool {
    let declared = response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(0);
    let hinted = HttpBody::size_hint(response.body()).lower();

    declared.max(hinted) > MAX_VALUE_SIZE as u64
}

/// Buffers a 2xx body, stores it, and hands the same bytes to the client.
///
/// A failed store write only costs the cache entry; the response goes out
/// regardless. A body that fails mid-read can no longer be forwarded intact,
/// so that one case becomes a 502 instead of a truncated 2xx.
async fn capture(
    response: Response<Body>,
    cache: &ResponseCache,
    key: String,
    ttl_seconds: u64,
) -> Response<Body> {
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(key = %key, error = %err, "Failed to read downstream response body");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let cached = CachedResponse::new(
        parts.status,
        parts.headers.get(CONTENT_TYPE).cloned(),
        bytes.clone(),
    );
    if let Err(err) = cache.fill(key.clone(), cached, ttl_seconds).await {
        warn!(key = %key, error = %err, "Response served uncached");
    }

    Response::from_parts(parts, Body::from(bytes))
}
