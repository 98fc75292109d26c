//! Repository for the `contacts` table.

use primo_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{Contact, CreateContact};

const COLUMNS: &str = "id, first_name, last_name, email, phone, suburb, project_type, \
                       budget, message, created_at";

/// Insert and read lead form submissions.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a contact submission, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts \
                (first_name, last_name, email, phone, suburb, project_type, budget, message) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.suburb)
            .bind(&input.project_type)
            .bind(input.budget)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every submission, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }
}
