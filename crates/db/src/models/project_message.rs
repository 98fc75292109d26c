//! Project message model and DTO.

use primo_core::project::SenderType;
use primo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `project_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectMessage {
    pub id: DbId,
    pub project_id: DbId,
    /// Customer id for customer messages, `None` for team messages.
    pub sender_id: Option<DbId>,
    pub sender_name: String,
    #[sqlx(try_from = "String")]
    pub sender_type: SenderType,
    pub message: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// DTO for appending a message. `message` must already be validated with
/// [`primo_core::project::validate_message_text`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectMessage {
    pub project_id: DbId,
    pub sender_id: Option<DbId>,
    pub sender_name: String,
    pub sender_type: SenderType,
    pub message: String,
}
