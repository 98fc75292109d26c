use std::sync::Arc;

use primo_core::chat::ChatResponder;
use primo_db::store::Store;

use crate::config::ServerConfig;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheaply cloneable; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Postgres or in-memory storage.
    pub store: Arc<dyn Store>,
    /// Answers website chat transcripts.
    pub responder: Arc<dyn ChatResponder>,
    pub config: Arc<ServerConfig>,
}
