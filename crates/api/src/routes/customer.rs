//! Route definitions for the customer portal.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{customer, project};
use crate::state::AppState;

/// Routes mounted at `/customer`. Everything except register and login
/// requires a Bearer token.
///
/// ```text
/// POST /register                   -> register
/// POST /login                      -> login
/// GET  /profile                    -> get_profile
/// PUT  /profile                    -> update_profile
/// GET  /projects                   -> list
/// GET  /projects/{id}              -> get_by_id
/// GET  /projects/{id}/updates      -> list_updates
/// GET  /projects/{id}/documents    -> list_documents
/// GET  /projects/{id}/messages     -> list_messages
/// POST /projects/{id}/messages     -> send_message
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(customer::register))
        .route("/login", post(customer::login))
        .route(
            "/profile",
            get(customer::get_profile).put(customer::update_profile),
        )
        .route("/projects", get(project::list))
        .route("/projects/{id}", get(project::get_by_id))
        .route("/projects/{id}/updates", get(project::list_updates))
        .route("/projects/{id}/documents", get(project::list_documents))
        .route(
            "/projects/{id}/messages",
            get(project::list_messages).post(project::send_message),
        )
}
