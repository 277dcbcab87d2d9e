//! Content block, catalogue and profile handlers.
//!
//! Every successful write on a content block evicts the cached reads it made
//! stale: the list, the block itself and the section listings it appears in.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};

use super::state::AppState;
use crate::cache::ResponseCache;
use crate::error::{CacheError, Result};
use crate::models::{
    ContentBlock, CreateContentBlockRequest, TrainingDrill, UpdateContentBlockRequest, UserProfile,
};

/// Cached path of the block listing.
pub const CONTENT_BLOCKS_PATH: &str = "/api/content-blocks";

/// Cached path prefix of per-section listings.
pub const CONTENT_SECTIONS_PATH: &str = "/api/content-sections";

/// Evicts every cached read affected by a write to block `id` in `sections`,
/// including query-string variants of each path.
pub async fn invalidate_content_block(cache: &ResponseCache, id: u64, sections: &[&str]) {
    cache.invalidate_path(CONTENT_BLOCKS_PATH).await;
    cache
        .invalidate_path(&format!("{}/{}", CONTENT_BLOCKS_PATH, id))
        .await;
    for section in sections {
        cache
            .invalidate_path(&format!("{}/{}", CONTENT_SECTIONS_PATH, section))
            .await;
    }
}

/// Handler for GET /api/content-blocks
pub async fn list_content_blocks(State(state): State<AppState>) -> Json<Vec<ContentBlock>> {
    state.simulate_latency().await;
    Json(state.content.read().await.blocks())
}

/// Handler for GET /api/content-blocks/:id
pub async fn get_content_block(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ContentBlock>> {
    state.simulate_latency().await;
    let block = state.content.read().await.block(id)?;
    Ok(Json(block))
}

/// Handler for GET /api/content-sections/:section
pub async fn list_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Json<Vec<ContentBlock>> {
    state.simulate_latency().await;
    Json(state.content.read().await.blocks_in_section(&section))
}

/// Handler for POST /api/content-blocks
pub async fn create_content_block(
    State(state): State<AppState>,
    Json(req): Json<CreateContentBlockRequest>,
) -> Result<(StatusCode, Json<ContentBlock>)> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let block = state.content.write().await.create_block(req);
    invalidate_content_block(&state.cache, block.id, &[block.section.as_str()]).await;

    Ok((StatusCode::CREATED, Json(block)))
}

/// Handler for PUT /api/content-blocks/:id
pub async fn update_content_block(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateContentBlockRequest>,
) -> Result<Json<ContentBlock>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let (previous_section, block) = state.content.write().await.update_block(id, req)?;
    invalidate_content_block(
        &state.cache,
        block.id,
        &[previous_section.as_str(), block.section.as_str()],
    )
    .await;

    Ok(Json(block))
}

/// Handler for DELETE /api/content-blocks/:id
pub async fn delete_content_block(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    let block = state.content.write().await.delete_block(id)?;
    invalidate_content_block(&state.cache, block.id, &[block.section.as_str()]).await;

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /api/training-drills
pub async fn list_training_drills(State(state): State<AppState>) -> Json<Vec<TrainingDrill>> {
    state.simulate_latency().await;
    Json(state.content.read().await.drills())
}

/// Handler for GET /api/user/profile
///
/// Identifies the caller by the `x-user-id` header.
pub async fn user_profile(State(state): State<AppState>, headers: HeaderMap) -> Json<UserProfile> {
    let user = headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("anonymous")
        .to_string();
    let views = state.content.write().await.record_profile_view();

    Json(UserProfile {
        user,
        views,
        generated_at: chrono::Utc::now().to_rfc3339(),
    })
}
