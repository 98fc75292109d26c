//! Repository for the `customers` table.

use primo_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{CreateCustomer, Customer, UpdateCustomer};

const COLUMNS: &str = "id, email, password_hash, first_name, last_name, phone, address, \
                       suburb, postcode, is_active, created_at, updated_at";

/// Provides account operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new active customer.
    ///
    /// Fails with a unique violation on `uq_customers_email` if the email
    /// is already registered.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers \
                (email, password_hash, first_name, last_name, phone, address, suburb, postcode) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.suburb)
            .bind(&input.postcode)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a customer by normalised email.
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE email = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Apply a profile edit. Only non-`None` fields are written.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET \
                first_name = COALESCE($2, first_name), \
                last_name = COALESCE($3, last_name), \
                phone = COALESCE($4, phone), \
                address = COALESCE($5, address), \
                suburb = COALESCE($6, suburb), \
                postcode = COALESCE($7, postcode), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.suburb)
            .bind(&input.postcode)
            .fetch_optional(pool)
            .await
    }

    /// Deactivate an account. Returns `true` if an active row was changed.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE customers SET is_active = false, updated_at = NOW() \
             WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
