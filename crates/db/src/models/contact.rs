//! Contact (lead form) model and DTO.

use primo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub suburb: String,
    pub project_type: String,
    /// Whole dollars.
    pub budget: Option<i64>,
    pub message: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a validated contact submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub suburb: String,
    pub project_type: String,
    pub budget: Option<i64>,
    pub message: String,
}
