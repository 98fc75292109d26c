use axum::routing::post;
use axum::Router;

use crate::handlers::seed;
use crate::state::AppState;

/// Development-only routes. Mounted by [`super::api_routes`] only when
/// `ENABLE_SEED_ENDPOINT` is set.
pub fn router() -> Router<AppState> {
    Router::new().route("/seed-test-data", post(seed::seed_test_data))
}
