//! Handler for lead-quality analysis.

use axum::Json;
use primo_core::lead::LeadAnalysis;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct AnalysisPayload {
    pub analysis: LeadAnalysis,
}

/// POST /api/analyze-lead
///
/// Requires a `conversation` array; the assessment itself is a fixed
/// placeholder.
pub async fn analyze(
    AppJson(body): AppJson<serde_json::Value>,
) -> AppResult<Json<ApiResponse<AnalysisPayload>>> {
    let turns = body
        .get("conversation")
        .and_then(|c| c.as_array())
        .map(Vec::len)
        .ok_or_else(|| AppError::BadRequest("Invalid conversation format".into()))?;

    tracing::debug!(turns, "Lead analysis requested");

    Ok(Json(ApiResponse::ok(AnalysisPayload {
        analysis: LeadAnalysis::placeholder(),
    })))
}
