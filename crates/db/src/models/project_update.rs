//! Project update (progress log entry) model and DTO.

use primo_core::project::UpdateType;
use primo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `project_updates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectUpdate {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub update_type: UpdateType,
    /// Progress snapshot at the time of the update.
    pub progress_percentage: Option<i32>,
    /// Image URLs.
    pub images: Vec<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectUpdate {
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    pub update_type: UpdateType,
    pub progress_percentage: Option<i32>,
    #[serde(default)]
    pub images: Vec<String>,
}
