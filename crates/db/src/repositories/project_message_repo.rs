//! Repository for the `project_messages` table.

use primo_core::project::SenderType;
use primo_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_message::{CreateProjectMessage, ProjectMessage};

const COLUMNS: &str =
    "id, project_id, sender_id, sender_name, sender_type, message, is_read, created_at";

/// Per-project conversation between the customer and the team.
pub struct ProjectMessageRepo;

impl ProjectMessageRepo {
    /// Append a message. New messages start unread.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectMessage,
    ) -> Result<ProjectMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_messages \
                (project_id, sender_id, sender_name, sender_type, message) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectMessage>(&query)
            .bind(input.project_id)
            .bind(input.sender_id)
            .bind(&input.sender_name)
            .bind(input.sender_type.as_str())
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List a project's messages in the order they were written.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_messages \
             WHERE project_id = $1 \
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, ProjectMessage>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Mark every unread message from `sender_type` on a project as read.
    ///
    /// Returns the number of messages that changed.
    pub async fn mark_read_from(
        pool: &PgPool,
        project_id: DbId,
        sender_type: SenderType,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE project_messages SET is_read = true \
             WHERE project_id = $1 AND sender_type = $2 AND is_read = false",
        )
        .bind(project_id)
        .bind(sender_type.as_str())
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
