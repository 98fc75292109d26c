//! Handlers for lead form submissions.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use primo_core::error::CoreError;
use primo_core::types::DbId;
use primo_core::validation::normalize_email;
use primo_db::models::contact::{Contact, CreateContact};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::check_form;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, ContactId};
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/contact`.
///
/// Missing fields deserialize as empty and are reported by the length
/// rules, so every problem comes back as a field-level violation.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(length(min = 2, message = "First name must be at least 2 characters"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 2, message = "Last name must be at least 2 characters"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 10, message = "Please enter a valid phone number"))]
    pub phone: String,
    #[serde(default)]
    #[validate(length(min = 2, message = "Please enter your suburb"))]
    pub suburb: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please select a project type"))]
    pub project_type: String,
    /// Whole dollars.
    #[validate(range(min = 0, message = "Budget cannot be negative"))]
    pub budget: Option<i64>,
    #[serde(default)]
    #[validate(length(min = 10, message = "Please provide more details about your project"))]
    pub message: String,
}

impl ContactRequest {
    fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: normalize_email(&self.email),
            phone: self.phone.trim().to_string(),
            suburb: self.suburb.trim().to_string(),
            project_type: self.project_type.trim().to_string(),
            budget: self.budget,
            message: self.message.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactCreated {
    pub message: &'static str,
    pub contact_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct ContactList {
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Serialize)]
pub struct ContactDetail {
    pub contact: Contact,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/contact
pub async fn submit(
    State(state): State<AppState>,
    AppJson(input): AppJson<ContactRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<ContactCreated>>)> {
    let input = input.normalized();
    check_form(&input, "Invalid form data", Vec::new())?;

    let contact = state
        .store
        .create_contact(&CreateContact {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            suburb: input.suburb,
            project_type: input.project_type,
            budget: input.budget,
            message: input.message,
        })
        .await?;

    tracing::info!(contact_id = contact.id, project_type = %contact.project_type, "Contact form submitted");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(ContactCreated {
            message: "Contact form submitted successfully",
            contact_id: contact.id,
        })),
    ))
}

/// GET /api/contacts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<ContactList>>> {
    let contacts = state.store.list_contacts().await?;
    Ok(Json(ApiResponse::ok(ContactList { contacts })))
}

/// GET /api/contacts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ContactId(id): ContactId,
) -> AppResult<Json<ApiResponse<ContactDetail>>> {
    let contact = state
        .store
        .find_contact(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;
    Ok(Json(ApiResponse::ok(ContactDetail { contact })))
}
