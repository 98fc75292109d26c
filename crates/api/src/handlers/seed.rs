//! Handler for the development fixture loader.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::seed::{seed_demo_data, DemoAccount};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SeedPayload {
    pub message: &'static str,
    pub accounts: Vec<DemoAccount>,
}

/// POST /api/seed-test-data
///
/// Only mounted when `ENABLE_SEED_ENDPOINT` is set. Safe to call twice:
/// the second call finds the demo accounts and creates nothing.
pub async fn seed_test_data(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<SeedPayload>>> {
    let outcome = seed_demo_data(state.store.as_ref()).await?;
    let message = if outcome.created {
        "Test data created successfully"
    } else {
        "Test data already present"
    };
    Ok(Json(ApiResponse::ok(SeedPayload {
        message,
        accounts: outcome.accounts,
    })))
}
