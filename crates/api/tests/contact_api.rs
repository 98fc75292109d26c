//! HTTP-level tests for lead form submission and retrieval.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json, post_raw};
use primo_db::store::MemStore;
use serde_json::json;

fn valid_contact() -> serde_json::Value {
    json!({
        "first_name": "Priya",
        "last_name": "Natarajan",
        "email": "Priya@Example.com ",
        "phone": "0412 345 678",
        "suburb": "Applecross",
        "project_type": "new-construction",
        "budget": 70000,
        "message": "Looking for a plunge pool with a spa corner.",
    })
}

fn field_names(json: &serde_json::Value) -> Vec<String> {
    json["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn submit_then_fetch_contact() {
    let app = build_test_app(Arc::new(MemStore::new()));

    let response = post_json(app.clone(), "/api/contact", valid_contact()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let id = json["contact_id"].as_i64().expect("contact_id must be a number");

    let response = get(app.clone(), &format!("/api/contacts/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["contact"]["email"], "priya@example.com");
    assert_eq!(json["contact"]["budget"], 70000);

    let response = get(app, "/api/contacts").await;
    let json = body_json(response).await;
    assert_eq!(json["contacts"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_email_is_a_field_error() {
    let app = build_test_app(Arc::new(MemStore::new()));
    let mut body = valid_contact();
    body["email"] = json!("not-an-email");

    let response = post_json(app, "/api/contact", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(field_names(&json), vec!["email"]);
}

#[tokio::test]
async fn missing_fields_are_all_reported() {
    let app = build_test_app(Arc::new(MemStore::new()));

    let response = post_json(app, "/api/contact", json!({ "first_name": "Al" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let fields = field_names(&body_json(response).await);
    for expected in ["email", "last_name", "message", "phone", "project_type", "suburb"] {
        assert!(fields.iter().any(|f| f == expected), "missing violation for {expected}");
    }
    assert!(!fields.iter().any(|f| f == "first_name"));
}

#[tokio::test]
async fn short_message_after_trimming_is_rejected() {
    let app = build_test_app(Arc::new(MemStore::new()));
    let mut body = valid_contact();
    body["message"] = json!("   short    ");

    let response = post_json(app, "/api/contact", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(field_names(&body_json(response).await), vec!["message"]);
}

#[tokio::test]
async fn negative_budget_is_rejected() {
    let app = build_test_app(Arc::new(MemStore::new()));
    let mut body = valid_contact();
    body["budget"] = json!(-5);

    let response = post_json(app, "/api/contact", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(field_names(&body_json(response).await), vec!["budget"]);
}

#[tokio::test]
async fn unknown_contact_is_404() {
    let app = build_test_app(Arc::new(MemStore::new()));
    let response = get(app, "/api/contacts/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["success"], false);
}

#[tokio::test]
async fn wrongly_typed_budget_is_a_field_error() {
    let app = build_test_app(Arc::new(MemStore::new()));
    let mut body = valid_contact();
    body["budget"] = json!("50000");

    let response = post_json(app, "/api/contact", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(field_names(&json), vec!["budget"]);
}

#[tokio::test]
async fn array_body_is_a_validation_error() {
    let app = build_test_app(Arc::new(MemStore::new()));

    let response = post_json(app, "/api/contact", json!(["not", "a", "form"])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn truncated_json_is_bad_request() {
    let app = build_test_app(Arc::new(MemStore::new()));

    let response = post_raw(app, "/api/contact", r#"{"first_name": "Priya""#, None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn non_numeric_contact_id_is_404() {
    let app = build_test_app(Arc::new(MemStore::new()));

    let response = get(app, "/api/contacts/abc").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Contact not found");
}
