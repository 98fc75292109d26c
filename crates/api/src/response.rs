//! Success envelope shared by every handler.
//!
//! Payload fields are flattened next to `success: true`, so a handler
//! returning `ApiResponse::ok(ProjectsPayload { projects })` produces
//! `{ "success": true, "projects": [...] }`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}
