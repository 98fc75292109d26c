//! Project document model and DTO.

use primo_core::project::DocumentType;
use primo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `project_documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectDocument {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[sqlx(try_from = "String")]
    pub document_type: DocumentType,
    pub file_url: String,
    pub uploaded_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectDocument {
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub document_type: DocumentType,
    pub file_url: String,
}
