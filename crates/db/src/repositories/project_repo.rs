//! Repository for the `projects` table.

use primo_core::project::{plan_advance, ProjectStatus};
use primo_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{AdvanceProject, CreateProject, Project};
use crate::store::StoreError;

const COLUMNS: &str = "id, customer_id, title, description, project_type, status, budget, \
                       estimated_start_date, estimated_end_date, actual_start_date, \
                       actual_end_date, progress_percentage, created_at, updated_at";

/// Provides queries for customer projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `status` defaults to `planning` and `progress_percentage` to 0.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects \
                (customer_id, title, description, project_type, status, budget, \
                 estimated_start_date, estimated_end_date, actual_start_date, actual_end_date, \
                 progress_percentage) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.customer_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.project_type.as_str())
            .bind(input.status.unwrap_or(ProjectStatus::Planning).as_str())
            .bind(input.budget)
            .bind(input.estimated_start_date)
            .bind(input.estimated_end_date)
            .bind(input.actual_start_date)
            .bind(input.actual_end_date)
            .bind(input.progress_percentage.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a customer's projects, most recently created first.
    pub async fn list_for_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects \
             WHERE customer_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(customer_id)
            .fetch_all(pool)
            .await
    }

    /// Move a project forward in its lifecycle.
    ///
    /// The row is locked with `SELECT ... FOR UPDATE` so concurrent
    /// advances are checked against the latest committed state. Returns
    /// `None` if the project does not exist.
    pub async fn advance(
        pool: &PgPool,
        id: DbId,
        input: &AdvanceProject,
    ) -> Result<Option<Project>, StoreError> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 FOR UPDATE");
        let Some(current) = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let (status, progress) = plan_advance(
            current.status,
            current.progress_percentage,
            input.status,
            input.progress_percentage,
        )?;

        let query = format!(
            "UPDATE projects SET \
                status = $2, \
                progress_percentage = $3, \
                actual_start_date = CASE \
                    WHEN $2 IN ('construction', 'finishing', 'completed') THEN COALESCE(actual_start_date, NOW()) \
                    ELSE actual_start_date END, \
                actual_end_date = CASE \
                    WHEN $2 = 'completed' THEN COALESCE(actual_end_date, NOW()) \
                    ELSE actual_end_date END, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(progress)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }
}
