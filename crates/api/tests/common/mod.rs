#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use primo_api::auth::jwt::{generate_token, JwtConfig};
use primo_api::auth::password::hash_password;
use primo_api::config::ServerConfig;
use primo_api::router::build_app_router;
use primo_api::state::AppState;
use primo_core::chat::{ChatResponder, SalesBot};
use primo_core::project::ProjectType;
use primo_core::types::DbId;
use primo_db::models::customer::{CreateCustomer, Customer};
use primo_db::models::project::{CreateProject, Project};
use primo_db::store::{MemStore, Store};
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "password123";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        enable_seed_endpoint: false,
        database_url: None,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            expiry_hours: 1,
        },
    }
}

/// Full router over the given store, answering chat with [`SalesBot`].
pub fn build_test_app(store: Arc<MemStore>) -> Router {
    build_test_app_with(store, Arc::new(SalesBot::new()), test_config())
}

pub fn build_test_app_with(
    store: Arc<MemStore>,
    responder: Arc<dyn ChatResponder>,
    config: ServerConfig,
) -> Router {
    let state = AppState {
        store,
        responder,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert an active customer whose password is [`TEST_PASSWORD`].
pub async fn create_customer(store: &MemStore, email: &str, first_name: &str) -> Customer {
    store
        .create_customer(&CreateCustomer {
            email: email.to_string(),
            password_hash: hash_password(TEST_PASSWORD).unwrap(),
            first_name: first_name.to_string(),
            last_name: "Tester".to_string(),
            phone: None,
            address: None,
            suburb: None,
            postcode: None,
        })
        .await
        .unwrap()
}

pub async fn create_project(store: &MemStore, customer_id: DbId, title: &str) -> Project {
    store
        .create_project(&CreateProject {
            customer_id,
            title: title.to_string(),
            description: None,
            project_type: ProjectType::NewConstruction,
            status: None,
            budget: Some(60_000),
            estimated_start_date: None,
            estimated_end_date: None,
            actual_start_date: None,
            actual_end_date: None,
            progress_percentage: None,
        })
        .await
        .unwrap()
}

/// A valid token for `customer` signed with the test secret.
pub fn token_for(customer: &Customer) -> String {
    generate_token(customer.id, &customer.email, &test_config().jwt).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, uri, Some(body), Some(token)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PUT, uri, Some(body), Some(token)).await
}

/// POST a raw (possibly malformed) body labelled as JSON.
pub async fn post_raw(app: Router, uri: &str, body: &'static str, token: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

/// Request with an arbitrary raw `Authorization` header value.
pub async fn get_with_authorization(app: Router, uri: &str, authorization: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
