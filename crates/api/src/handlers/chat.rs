//! Handler for the website chat widget.

use axum::extract::State;
use axum::Json;
use primo_core::chat::{fallback_reply, ChatMessage};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
}

/// POST /api/chat
///
/// Body: `{ "messages": [{ "role", "content" }, ...] }`, the whole
/// transcript so far. Entries are decoded leniently. A responder failure
/// is logged and answered with a canned reply; the caller never sees it.
pub async fn chat(
    State(state): State<AppState>,
    AppJson(body): AppJson<serde_json::Value>,
) -> AppResult<Json<ApiResponse<ChatReply>>> {
    let transcript = body
        .get("messages")
        .and_then(ChatMessage::transcript_from_json)
        .ok_or_else(|| AppError::BadRequest("Invalid messages format".into()))?;

    let response = match state.responder.respond(&transcript).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(error = %e, turns = transcript.len(), "Chat responder failed, using fallback");
            fallback_reply(&transcript).to_string()
        }
    };

    Ok(Json(ApiResponse::ok(ChatReply { response })))
}
