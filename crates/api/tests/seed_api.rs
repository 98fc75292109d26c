//! HTTP-level tests for the development fixture endpoint.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_with, get_auth, post_json, test_config};
use primo_core::chat::SalesBot;
use primo_db::store::MemStore;
use serde_json::json;

fn seeding_app(store: Arc<MemStore>) -> axum::Router {
    let mut config = test_config();
    config.enable_seed_endpoint = true;
    build_test_app_with(store, Arc::new(SalesBot::new()), config)
}

#[tokio::test]
async fn seed_route_absent_unless_enabled() {
    let app = build_test_app(Arc::new(MemStore::new()));
    let response = post_json(app, "/api/seed-test-data", json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn seeded_account_can_log_in_and_see_projects() {
    let app = seeding_app(Arc::new(MemStore::new()));

    let response = post_json(app.clone(), "/api/seed-test-data", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Test data created successfully");
    assert_eq!(json["accounts"][0]["email"], "john.smith@example.com");

    let response = post_json(
        app.clone(),
        "/api/customer/login",
        json!({ "email": "john.smith@example.com", "password": "password123" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let token = body_json(response).await["token"].as_str().unwrap().to_string();

    let json = body_json(get_auth(app.clone(), "/api/customer/projects", &token).await).await;
    let projects = json["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 2);

    let resort = projects
        .iter()
        .find(|p| p["title"] == "Luxury Resort-Style Pool")
        .unwrap();
    let uri = format!("/api/customer/projects/{}/messages", resort["id"]);
    let json = body_json(get_auth(app, &uri, &token).await).await;
    assert_eq!(json["messages"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn seeding_twice_creates_nothing_new() {
    let app = seeding_app(Arc::new(MemStore::new()));
    post_json(app.clone(), "/api/seed-test-data", json!({})).await;

    let response = post_json(app, "/api/seed-test-data", json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Test data already present");
}
