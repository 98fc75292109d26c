//! Customer account model and DTOs.
//!
//! [`Customer`] carries the password hash and does not
//! implement `Serialize`; responses use [`CustomerProfile`] or
//! [`CustomerSummary`].

use primo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `customers` table.
#[derive(Debug, Clone, FromRow)]
pub struct Customer {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub suburb: Option<String>,
    pub postcode: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Customer {
    /// Display name used when the customer writes a project message.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn profile(&self) -> CustomerProfile {
        CustomerProfile {
            id: self.id,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            suburb: self.suburb.clone(),
            postcode: self.postcode.clone(),
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn summary(&self) -> CustomerSummary {
        CustomerSummary {
            id: self.id,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Everything about a customer except the credential hash.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerProfile {
    pub id: DbId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub suburb: Option<String>,
    pub postcode: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Identity returned alongside a freshly issued token.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerSummary {
    pub id: DbId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// DTO for creating a customer. `email` must already be normalised and
/// `password_hash` must be a PHC string.
#[derive(Debug, Clone)]
pub struct CreateCustomer {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub suburb: Option<String>,
    pub postcode: Option<String>,
}

/// DTO for a profile edit. `None` fields are left unchanged; email,
/// password and active flag cannot be changed this way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub suburb: Option<String>,
    pub postcode: Option<String>,
}
