//! Route definitions for lead form submissions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes merged at the `/api` root.
///
/// ```text
/// POST /contact         -> submit
/// GET  /contacts        -> list
/// GET  /contacts/{id}   -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact::submit))
        .route("/contacts", get(contact::list))
        .route("/contacts/{id}", get(contact::get_by_id))
}
