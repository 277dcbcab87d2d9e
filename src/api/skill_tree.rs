//! Skill-tree handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::state::AppState;
use crate::error::{CacheError, Result};
use crate::models::{CreateSkillNodeRequest, NodeQuery, SkillNode};

/// Cached path of node listings; also the prefix of per-node child listings.
pub const SKILL_NODES_PATH: &str = "/api/skill-tree/nodes";

/// Cached path prefix of per-level listings.
pub const SKILL_LEVELS_PATH: &str = "/api/skill-tree/levels";

/// Handler for GET /api/skill-tree/nodes
pub async fn list_nodes(
    State(state): State<AppState>,
    Query(query): Query<NodeQuery>,
) -> Json<Vec<SkillNode>> {
    state.simulate_latency().await;
    Json(state.content.read().await.nodes(&query))
}

/// Handler for GET /api/skill-tree/nodes/:id/children
pub async fn node_children(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<SkillNode>>> {
    state.simulate_latency().await;
    let children = state.content.read().await.children(id)?;
    Ok(Json(children))
}

/// Handler for GET /api/skill-tree/levels/:level
pub async fn level_nodes(
    State(state): State<AppState>,
    Path(level): Path<u32>,
) -> Json<Vec<SkillNode>> {
    state.simulate_latency().await;
    Json(state.content.read().await.nodes_at_level(level))
}

/// Handler for POST /api/skill-tree/nodes
///
/// A new node changes every filtered node listing and its parent's children,
/// all of which live under [`SKILL_NODES_PATH`], plus its level listing.
pub async fn create_node(
    State(state): State<AppState>,
    Json(req): Json<CreateSkillNodeRequest>,
) -> Result<(StatusCode, Json<SkillNode>)> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let node = state.content.write().await.create_node(req)?;

    state.cache.invalidate_by_pattern(SKILL_NODES_PATH).await;
    state
        .cache
        .invalidate_path(&format!("{}/{}", SKILL_LEVELS_PATH, node.level))
        .await;

    Ok((StatusCode::CREATED, Json(node)))
}
