//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycles through the content API, including the
//! invalidation each write endpoint performs.

use axum::{
    body::Body,
    http::{header::CACHE_CONTROL, Request, StatusCode},
    Router,
};
use response_cache::{api::create_router, content::ContentRepository, AppState, ResponseCache};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> (Router, ResponseCache) {
    let cache = ResponseCache::new();
    let state = AppState::new(cache.clone(), ContentRepository::seeded());
    (create_router(state), cache)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn send_json(app: &Router, method: &str, uri: &str, json: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

fn is_hit(response: &axum::response::Response) -> bool {
    response.headers().get(CACHE_CONTROL).is_some()
}

// == Content Block Tests ==

#[tokio::test]
async fn test_list_content_blocks_is_cached() {
    let (app, cache) = create_test_app();

    let first = get(&app, "/api/content-blocks").await;
    assert_eq!(first.status(), StatusCode::OK);
    assert!(!is_hit(&first));
    let json = body_to_json(first.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 3);

    let second = get(&app, "/api/content-blocks").await;
    assert!(is_hit(&second));
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_create_block_refreshes_cached_list() {
    let (app, _cache) = create_test_app();

    get(&app, "/api/content-blocks").await;
    get(&app, "/api/content-sections/hero").await;

    let created = send_json(
        &app,
        "POST",
        "/api/content-blocks",
        r#"{"section":"hero","title":"Combine Tour","body":"Dates announced"}"#,
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let list = get(&app, "/api/content-blocks").await;
    assert!(!is_hit(&list), "list must be refetched after a write");
    let json = body_to_json(list.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 4);

    let section = get(&app, "/api/content-sections/hero").await;
    assert!(!is_hit(&section));
    let json = body_to_json(section.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_block_refreshes_query_variants_of_list() {
    let (app, _cache) = create_test_app();

    let before = body_to_json(get(&app, "/api/content-blocks?page=1").await.into_body()).await;
    assert!(is_hit(&get(&app, "/api/content-blocks?page=1").await));

    let created = send_json(
        &app,
        "POST",
        "/api/content-blocks",
        r#"{"section":"academy","title":"Open Gym"}"#,
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let list = get(&app, "/api/content-blocks?page=1").await;
    assert!(!is_hit(&list));
    let after = body_to_json(list.into_body()).await;
    assert_eq!(
        after.as_array().unwrap().len(),
        before.as_array().unwrap().len() + 1
    );
}

#[tokio::test]
async fn test_update_block_refreshes_query_variant_of_item() {
    let (app, _cache) = create_test_app();

    get(&app, "/api/content-blocks/1?preview=true").await;

    send_json(&app, "PUT", "/api/content-blocks/1", r#"{"title":"Renamed"}"#).await;

    let item = get(&app, "/api/content-blocks/1?preview=true").await;
    assert!(!is_hit(&item));
    let json = body_to_json(item.into_body()).await;
    assert_eq!(json["title"], "Renamed");
}

#[tokio::test]
async fn test_section_with_space_is_rejected() {
    let (app, cache) = create_test_app();

    let response = send_json(
        &app,
        "POST",
        "/api/content-blocks",
        r#"{"section":"Summer Camp","title":"Registration"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let section = get(&app, "/api/content-sections/Summer%20Camp").await;
    let json = body_to_json(section.into_body()).await;
    assert!(json.as_array().unwrap().is_empty());
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_create_block_refreshes_new_section_listing() {
    let (app, _cache) = create_test_app();

    let create = r#"{"section":"summer-camp","title":"Registration"}"#;
    send_json(&app, "POST", "/api/content-blocks", create).await;

    let before = body_to_json(get(&app, "/api/content-sections/summer-camp").await.into_body()).await;
    assert_eq!(before.as_array().unwrap().len(), 1);

    send_json(&app, "POST", "/api/content-blocks", create).await;

    let section = get(&app, "/api/content-sections/summer-camp").await;
    assert!(!is_hit(&section));
    let after = body_to_json(section.into_body()).await;
    assert_eq!(after.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_block_refreshes_cached_item() {
    let (app, _cache) = create_test_app();

    get(&app, "/api/content-blocks/1").await;
    assert!(is_hit(&get(&app, "/api/content-blocks/1").await));

    let updated = send_json(&app, "PUT", "/api/content-blocks/1", r#"{"title":"Updated"}"#).await;
    assert_eq!(updated.status(), StatusCode::OK);

    let item = get(&app, "/api/content-blocks/1").await;
    assert!(!is_hit(&item));
    let json = body_to_json(item.into_body()).await;
    assert_eq!(json["title"], "Updated");
}

#[tokio::test]
async fn test_delete_block_then_item_is_not_found() {
    let (app, cache) = create_test_app();

    get(&app, "/api/content-blocks/2").await;

    let deleted = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/content-blocks/2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    assert_eq!(get(&app, "/api/content-blocks/2").await.status(), StatusCode::NOT_FOUND);
    assert!(cache.is_empty().await, "404 must not be cached");
}

#[tokio::test]
async fn test_missing_block_is_not_cached() {
    let (app, cache) = create_test_app();

    let response = get(&app, "/api/content-blocks/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());

    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_invalid_block_request() {
    let (app, _cache) = create_test_app();

    let response = send_json(&app, "POST", "/api/content-blocks", r#"{"section":"","title":"x"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send_json(&app, "POST", "/api/content-blocks", r#"{"invalid json"#).await;
    assert!(
        response.status() == StatusCode::BAD_REQUEST
            || response.status() == StatusCode::UNPROCESSABLE_ENTITY
    );
}

// == Skill Tree Tests ==

#[tokio::test]
async fn test_create_node_refreshes_node_listings() {
    let (app, cache) = create_test_app();

    get(&app, "/api/skill-tree/nodes?sportType=Basketball").await;
    get(&app, "/api/skill-tree/nodes/1/children").await;
    get(&app, "/api/skill-tree/levels/2").await;
    get(&app, "/api/training-drills").await;
    assert_eq!(cache.len().await, 4);

    let created = send_json(
        &app,
        "POST",
        "/api/skill-tree/nodes",
        r#"{"name":"Euro Step","sportType":"Basketball","level":2,"parentId":1}"#,
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    assert_eq!(cache.keys().await, vec!["/api/training-drills".to_string()]);

    let listing = get(&app, "/api/skill-tree/nodes?sportType=Basketball").await;
    let json = body_to_json(listing.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 3);

    let children = get(&app, "/api/skill-tree/nodes/1/children").await;
    let json = body_to_json(children.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_node_with_unknown_parent() {
    let (app, _cache) = create_test_app();

    let response = send_json(
        &app,
        "POST",
        "/api/skill-tree/nodes",
        r#"{"name":"Orphan","sportType":"Soccer","level":3,"parentId":77}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == User Profile Tests ==

#[tokio::test]
async fn test_user_profile_is_never_cached() {
    let (app, cache) = create_test_app();

    let first = body_to_json(get(&app, "/api/user/profile").await.into_body()).await;
    let second = body_to_json(get(&app, "/api/user/profile").await.into_body()).await;

    assert_eq!(first["views"], 1);
    assert_eq!(second["views"], 2);
    assert!(cache.is_empty().await);
}

// == Admin Tests ==

#[tokio::test]
async fn test_admin_invalidate_and_clear() {
    let (app, cache) = create_test_app();

    get(&app, "/api/skill-tree/nodes?sportType=Basketball").await;
    get(&app, "/api/skill-tree/nodes?sportType=Football").await;
    get(&app, "/api/training-drills").await;

    let response = send_json(
        &app,
        "POST",
        "/api/admin/cache/invalidate",
        r#"{"pattern":"/api/skill-tree/nodes"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["invalidated"], 2);
    assert_eq!(cache.len().await, 1);

    for expected in [1, 0] {
        let response = send_json(&app, "POST", "/api/admin/cache/clear", "{}").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_to_json(response.into_body()).await;
        assert_eq!(json["invalidated"], expected);
    }
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_admin_stats_endpoint() {
    let (app, _cache) = create_test_app();

    get(&app, "/api/training-drills").await; // miss + fill
    get(&app, "/api/training-drills").await; // hit

    let response = get(&app, "/api/admin/cache/stats").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;

    assert_eq!(json["hits"].as_u64().unwrap(), 1);
    assert_eq!(json["misses"].as_u64().unwrap(), 1);
    assert_eq!(json["fills"].as_u64().unwrap(), 1);
    assert_eq!(json["total_entries"].as_u64().unwrap(), 1);
    assert!(json.get("hit_rate").is_some());
}

#[tokio::test]
async fn test_admin_invalidate_rejects_empty_body() {
    let (app, _cache) = create_test_app();

    let response = send_json(&app, "POST", "/api/admin/cache/invalidate", "{}").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _cache) = create_test_app();

    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}
