use axum::routing::post;
use axum::Router;

use crate::handlers::{chat, lead};
use crate::state::AppState;

/// Public sales-assistant routes, merged at the `/api` root.
///
/// ```text
/// POST /chat           -> chat
/// POST /analyze-lead   -> analyze
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat::chat))
        .route("/analyze-lead", post(lead::analyze))
}
