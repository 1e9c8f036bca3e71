//! Integration tests for serving the tracker UI.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use poker_tracker::roster::{DistributorClient, DistributorConfig, RosterPolicy};
use poker_tracker::TableManager;
use pt_server::api::{AppState, INDEX_FILE, create_router};
use std::sync::Arc;
use tower::ServiceExt; // For `oneshot` method

/// Helper to create a router serving files from `dir`
fn create_router_for(dir: &std::path::Path) -> axum::Router {
    let client = DistributorClient::new(DistributorConfig::default()).unwrap();
    let state = AppState {
        table_manager: Arc::new(TableManager::new(Arc::new(client), RosterPolicy::Degrade)),
    };
    create_router(state, dir)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_index_serves_tracker_page() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(INDEX_FILE), "<html>tracker</html>").unwrap();

    let (status, body) = get(create_router_for(dir.path()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<html>tracker</html>");
}

#[tokio::test]
async fn test_card_images_are_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("images")).unwrap();
    std::fs::write(dir.path().join("images/card_back.png"), [0x89, b'P', b'N', b'G']).unwrap();

    let (status, body) = get(create_router_for(dir.path()), "/static/images/card_back.png").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, [0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn test_missing_files_are_404() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_router_for(dir.path());

    let (status, _) = get(app.clone(), "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app, "/static/images/ace_of_spades.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
