//! Cacheability rules applied before any cache lookup.

use std::fmt;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};

/// Path substrings that are never cached, whatever the method or caller.
pub const EXCLUDED_PATHS: &[&str] = &[
    "/api/auth",
    "/login",
    "/logout",
    "/register",
    "/api/admin",
    "/api/user",
    "/upload",
];

/// Path prefixes still cached for authenticated callers.
pub const DEFAULT_AUTHENTICATED_ALLOW_LIST: &[&str] = &["/api/content-blocks"];

/// Decides whether a request belongs to an authenticated session.
pub type AuthPredicate = Arc<dyn Fn(&Request<Body>) -> bool + Send + Sync>;

/// Why a request skipped the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BypassReason {
    /// Not a GET
    Method,
    /// Path contains an excluded substring
    ExcludedPath,
    /// Authenticated caller on a route outside the allow-list
    Authenticated,
}

/// Outcome of evaluating a request against a [`CachePolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheDecision {
    Cacheable,
    Bypass(BypassReason),
}

/// Predicate for deployments without sessions: nobody is authenticated.
pub fn anonymous() -> AuthPredicate {
    Arc::new(|_: &Request<Body>| false)
}

/// Treats a request as authenticated when it carries an `Authorization`
/// header or a `connect.sid` session cookie.
pub fn session_predicate() -> AuthPredicate {
    Arc::new(|request: &Request<Body>| {
        let headers = request.headers();
        if headers.contains_key(header::AUTHORIZATION) {
            return true;
        }
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|cookies| cookies.split(';'))
            .any(|cookie| cookie.trim_start().starts_with("connect.sid="))
    })
}

// == Cache Policy ==
/// Per-request cacheability check.
///
/// Rules run in order: method, excluded paths, then the authenticated-session
/// check. Only a request passing all three may touch the cache.
#[derive(Clone)]
pub struct CachePolicy {
    is_authenticated: AuthPredicate,
    allow_list: &'static [&'static str],
}

impl CachePolicy {
    pub fn new(is_authenticated: AuthPredicate) -> Self {
        Self {
            is_authenticated,
            allow_list: DEFAULT_AUTHENTICATED_ALLOW_LIST,
        }
    }

    /// Replaces the prefixes that remain cacheable for authenticated callers.
    pub fn with_allow_list(mut self, allow_list: &'static [&'static str]) -> Self {
        self.allow_list = allow_list;
        self
    }

    pub fn evaluate(&self, request: &Request<Body>) -> CacheDecision {
        if request.method() != Method::GET {
            return CacheDecision::Bypass(BypassReason::Method);
        }

        let path = request.uri().path();
        if EXCLUDED_PATHS.iter().any(|excluded| path.contains(excluded)) {
            return CacheDecision::Bypass(BypassReason::ExcludedPath);
        }

        if (self.is_authenticated)(request)
            && !self.allow_list.iter().any(|prefix| path.starts_with(prefix))
        {
            return CacheDecision::Bypass(BypassReason::Authenticated);
        }

        CacheDecision::Cacheable
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::new(anonymous())
    }
}

impl fmt::Debug for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachePolicy")
            .field("excluded", &EXCLUDED_PATHS)
            .field("allow_list", &self.allow_list)
            .finish_non_exhaustive()
    }
}
