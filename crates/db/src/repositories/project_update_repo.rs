//! Repository for the `project_updates` table.

use primo_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_update::{CreateProjectUpdate, ProjectUpdate};

const COLUMNS: &str =
    "id, project_id, title, description, update_type, progress_percentage, images, created_at";

/// Append-only progress log per project.
pub struct ProjectUpdateRepo;

impl ProjectUpdateRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectUpdate,
    ) -> Result<ProjectUpdate, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_updates \
                (project_id, title, description, update_type, progress_percentage, images) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectUpdate>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.update_type.as_str())
            .bind(input.progress_percentage)
            .bind(&input.images)
            .fetch_one(pool)
            .await
    }

    /// List updates for a project, newest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectUpdate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_updates \
             WHERE project_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ProjectUpdate>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
