//! API Routes
//!
//! Configures the Axum router and the cache layers wrapping each route group.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::admin::{cache_stats, clear_cache, health_handler, invalidate_cache};
use super::content::{
    create_content_block, delete_content_block, get_content_block, list_content_blocks,
    list_section, list_training_drills, update_content_block, user_profile,
};
use super::skill_tree::{create_node, level_nodes, list_nodes, node_children};
use super::state::AppState;
use crate::middleware::{session_predicate, CachePolicy, ResponseCacheLayer};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - Response cache: the dynamic API uses `state.cache_ttl`, the drill
///   catalogue `state.static_cache_ttl`; both share `state.cache`
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let policy = CachePolicy::new(session_predicate());

    let api = Router::new()
        .route(
            "/api/content-blocks",
            get(list_content_blocks).post(create_content_block),
        )
        .route(
            "/api/content-blocks/:id",
            get(get_content_block)
                .put(update_content_block)
                .delete(delete_content_block),
        )
        .route("/api/content-sections/:section", get(list_section))
        .route("/api/skill-tree/nodes", get(list_nodes).post(create_node))
        .route("/api/skill-tree/nodes/:id/children", get(node_children))
        .route("/api/skill-tree/levels/:level", get(level_nodes))
        .route("/api/user/profile", get(user_profile))
        .route("/api/admin/cache/stats", get(cache_stats))
        .route("/api/admin/cache/clear", post(clear_cache))
        .route("/api/admin/cache/invalidate", post(invalidate_cache))
        .layer(
            ResponseCacheLayer::new(state.cache.clone())
                .with_ttl(state.cache_ttl)
                .with_policy(policy.clone()),
        );

    let catalogue = Router::new()
        .route("/api/training-drills", get(list_training_drills))
        .layer(
            ResponseCacheLayer::new(state.cache.clone())
                .with_ttl(state.static_cache_ttl)
                .with_policy(policy),
        );

    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api)
        .merge(catalogue)
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
