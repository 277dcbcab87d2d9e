//! HTTP middleware.
//!
//! - [`ResponseCacheLayer`]: serves repeated GETs from the [`ResponseCache`]
//!   and captures successful responses on a miss.
//!
//! [`ResponseCache`]: crate::cache::ResponseCache

mod key;
mod layer;
mod policy;

pub use key::cache_key;
pub use layer::{ResponseCacheLayer, ResponseCacheService};
pub use policy::{
    anonymous, session_predicate, AuthPredicate, BypassReason, CacheDecision, CachePolicy,
    DEFAULT_AUTHENTICATED_ALLOW_LIST, EXCLUDED_PATHS,
};
