pub mod chat;
pub mod contact;
pub mod customer;
pub mod dev;
pub mod health;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /contact                                  submit lead form (POST)
/// /contacts                                 list leads
/// /contacts/{id}                            get lead
///
/// /customer/register                        register (POST)
/// /customer/login                           login (POST)
/// /customer/profile                         get, update (auth required)
/// /customer/projects                        list own projects
/// /customer/projects/{id}                   get own project
/// /customer/projects/{id}/updates           progress log
/// /customer/projects/{id}/documents         documents
/// /customer/projects/{id}/messages          list (marks team messages read), send
///
/// /chat                                     chat widget reply (POST)
/// /analyze-lead                             lead assessment (POST)
///
/// /seed-test-data                           demo fixture (POST, only if enabled)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    let router = Router::new()
        // Lead form.
        .merge(contact::router())
        // Customer portal.
        .nest("/customer", customer::router())
        // Chat widget and lead analysis.
        .merge(chat::router());

    if config.enable_seed_endpoint {
        tracing::warn!("Seed endpoint enabled; do not run this configuration in production");
        router.merge(dev::router())
    } else {
        router
    }
}
