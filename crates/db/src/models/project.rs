//! Project model and DTOs.

use primo_core::project::{ProjectStatus, ProjectType};
use primo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub customer_id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[sqlx(try_from = "String")]
    pub project_type: ProjectType,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    /// Whole dollars.
    pub budget: Option<i64>,
    pub estimated_start_date: Option<Timestamp>,
    pub estimated_end_date: Option<Timestamp>,
    pub actual_start_date: Option<Timestamp>,
    pub actual_end_date: Option<Timestamp>,
    pub progress_percentage: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project on behalf of a customer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub customer_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub project_type: ProjectType,
    /// Defaults to `planning`.
    pub status: Option<ProjectStatus>,
    pub budget: Option<i64>,
    pub estimated_start_date: Option<Timestamp>,
    pub estimated_end_date: Option<Timestamp>,
    pub actual_start_date: Option<Timestamp>,
    pub actual_end_date: Option<Timestamp>,
    /// Defaults to 0.
    pub progress_percentage: Option<i32>,
}

/// Requested lifecycle change; see [`primo_core::project::plan_advance`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvanceProject {
    pub status: Option<ProjectStatus>,
    pub progress_percentage: Option<i32>,
}
