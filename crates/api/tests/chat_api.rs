//! HTTP-level tests for the chat widget and lead analysis endpoints.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_with, post_json, post_raw, test_config};
use primo_core::chat::rules::replies;
use primo_core::chat::{ChatMessage, ChatResponder};
use primo_core::error::CoreError;
use primo_db::store::MemStore;
use serde_json::json;

/// Responder that always fails, standing in for an unavailable assistant.
struct BrokenResponder;

#[async_trait]
impl ChatResponder for BrokenResponder {
    async fn respond(&self, _transcript: &[ChatMessage]) -> Result<String, CoreError> {
        Err(CoreError::Internal("assistant offline".to_string()))
    }
}

fn app() -> axum::Router {
    build_test_app(Arc::new(MemStore::new()))
}

#[tokio::test]
async fn greeting_for_hi() {
    let response = post_json(
        app(),
        "/api/chat",
        json!({ "messages": [{ "role": "user", "content": "hi" }] }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["response"], replies::GREETING);
}

#[tokio::test]
async fn qualified_transcript_gets_consultation_offer() {
    let response = post_json(
        app(),
        "/api/chat",
        json!({ "messages": [
            { "role": "user", "content": "I'm John" },
            { "role": "assistant", "content": "Nice to meet you John! Which suburb are you in?" },
            { "role": "user", "content": "I live in Cottesloe" },
            { "role": "user", "content": "I want a new pool" },
        ] }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["response"], replies::QUALIFIED_CLOSING);
}

#[tokio::test]
async fn empty_transcript_is_accepted() {
    let response = post_json(app(), "/api/chat", json!({ "messages": [] })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["response"], replies::GREETING);
}

#[tokio::test]
async fn malformed_entries_are_tolerated() {
    let response = post_json(
        app(),
        "/api/chat",
        json!({ "messages": [{ "role": "robot" }, { "content": "how much does it cost?" }] }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["response"], replies::PRICING);
}

#[tokio::test]
async fn non_array_messages_rejected() {
    for body in [json!({ "messages": "hi" }), json!({})] {
        let response = post_json(app(), "/api/chat", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid messages format");
    }
}

#[tokio::test]
async fn responder_failure_degrades_to_fallback() {
    let app = build_test_app_with(
        Arc::new(MemStore::new()),
        Arc::new(BrokenResponder),
        test_config(),
    );

    let response = post_json(
        app,
        "/api/chat",
        json!({ "messages": [{ "role": "user", "content": "Can you build a new pool for us?" }] }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["response"], replies::DEGRADED_CONSTRUCTION);
}

#[tokio::test]
async fn lead_analysis_returns_placeholder() {
    let response = post_json(
        app(),
        "/api/analyze-lead",
        json!({ "conversation": [{ "role": "user", "content": "hi" }] }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["analysis"]["score"], 7);
    assert_eq!(json["analysis"]["interest_level"], "medium");
    assert_eq!(json["analysis"]["budget_indication"], "unknown");
}

#[tokio::test]
async fn lead_analysis_requires_conversation_array() {
    let response = post_json(app(), "/api/analyze-lead", json!({ "conversation": {} })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid conversation format");
}

#[tokio::test]
async fn invalid_json_gets_error_envelope() {
    for uri in ["/api/chat", "/api/analyze-lead"] {
        let response = post_raw(app(), uri, "{not json", None).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "POST {uri}");
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "BAD_REQUEST");
    }
}
