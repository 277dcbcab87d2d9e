//! Cache administration and health handlers.
//!
//! These routes live under `/api/admin`, which the cache layer never caches.

use axum::{extract::State, Json};

use super::state::AppState;
use crate::error::{CacheError, Result};
use crate::models::{HealthResponse, InvalidateRequest, InvalidationResponse, StatsResponse};

/// Handler for GET /api/admin/cache/stats
pub async fn cache_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for POST /api/admin/cache/clear
pub async fn clear_cache(State(state): State<AppState>) -> Json<InvalidationResponse> {
    Json(state.cache.clear_all().await.into())
}

/// Handler for POST /api/admin/cache/invalidate
pub async fn invalidate_cache(
    State(state): State<AppState>,
    Json(req): Json<InvalidateRequest>,
) -> Result<Json<InvalidationResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let result = match (req.key, req.pattern) {
        (Some(key), _) => state.cache.invalidate_exact(&key).await,
        (None, Some(pattern)) => state.cache.invalidate_by_pattern(&pattern).await,
        (None, None) => {
            return Err(CacheError::InvalidRequest(
                "Provide a key or a pattern".to_string(),
            ))
        }
    };

    Ok(Json(result.into()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CachedResponse, ResponseCache};
    use crate::content::ContentRepository;

    async fn warmed_state() -> AppState {
        let state = AppState::new(ResponseCache::new(), ContentRepository::new());
        for key in ["/api/blog-posts", "/api/blog-posts/featured", "/api/training-drills"] {
            state
                .cache
                .fill(key.to_string(), CachedResponse::ok("cached"), 300)
                .await
                .unwrap();
        }
        state
    }

    #[tokio::test]
    async fn test_invalidate_by_pattern_handler() {
        let state = warmed_state().await;
        let req = InvalidateRequest {
            key: None,
            pattern: Some("/api/blog-posts".to_string()),
        };

        let response = invalidate_cache(State(state.clone()), Json(req)).await.unwrap();

        assert_eq!(response.invalidated, 2);
        assert_eq!(state.cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_invalidate_by_key_handler() {
        let state = warmed_state().await;
        let req = InvalidateRequest {
            key: Some("/api/blog-posts".to_string()),
            pattern: None,
        };

        let response = invalidate_cache(State(state.clone()), Json(req)).await.unwrap();

        assert_eq!(response.invalidated, 1);
        assert_eq!(state.cache.len().await, 2);
    }

    #[tokio::test]
    async fn test_invalidate_requires_target() {
        let state = warmed_state().await;
        let result = invalidate_cache(State(state), Json(InvalidateRequest::default())).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_clear_and_stats_handlers() {
        let state = warmed_state().await;

        let cleared = clear_cache(State(state.clone())).await;
        assert_eq!(cleared.invalidated, 3);

        let stats = cache_stats(State(state)).await;
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.fills, 3);
        assert_eq!(stats.invalidations, 3);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
