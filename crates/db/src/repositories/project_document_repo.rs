//! Repository for the `project_documents` table.

use primo_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_document::{CreateProjectDocument, ProjectDocument};

const COLUMNS: &str = "id, project_id, title, description, document_type, file_url, uploaded_at";

pub struct ProjectDocumentRepo;

impl ProjectDocumentRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectDocument,
    ) -> Result<ProjectDocument, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_documents \
                (project_id, title, description, document_type, file_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectDocument>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.document_type.as_str())
            .bind(&input.file_url)
            .fetch_one(pool)
            .await
    }

    /// List documents for a project, most recently uploaded first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_documents \
             WHERE project_id = $1 \
             ORDER BY uploaded_at DESC, id DESC"
        );
        sqlx::query_as::<_, ProjectDocument>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
