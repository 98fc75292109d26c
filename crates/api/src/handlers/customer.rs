//! Handlers for customer accounts (register, login, profile).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use primo_core::error::CoreError;
use primo_core::validation::{normalize_email, trim_optional, FieldViolation};
use primo_db::models::customer::{CreateCustomer, Customer, CustomerProfile, CustomerSummary, UpdateCustomer};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::check_form;
use crate::auth::jwt::generate_token;
use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthCustomer;
use crate::response::ApiResponse;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/customer/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub suburb: Option<String>,
    pub postcode: Option<String>,
}

/// Request body for `POST /api/customer/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for `PUT /api/customer/profile`. Unknown fields (email,
/// password, active flag) are ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "First name cannot be blank"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "Last name cannot be blank"))]
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub suburb: Option<String>,
    pub postcode: Option<String>,
}

/// Token issued by register and login.
#[derive(Debug, Serialize)]
pub struct AuthPayload {
    pub message: &'static str,
    pub token: String,
    pub customer: CustomerSummary,
}

#[derive(Debug, Serialize)]
pub struct ProfilePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub customer: CustomerProfile,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/customer/register
///
/// Create an account and return a token for it. Emails are stored trimmed
/// and lower-cased; a taken email yields 409.
pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<AuthPayload>>)> {
    let input = RegisterRequest {
        email: normalize_email(&input.email),
        first_name: input.first_name.trim().to_string(),
        last_name: input.last_name.trim().to_string(),
        phone: trim_optional(input.phone),
        address: trim_optional(input.address),
        suburb: trim_optional(input.suburb),
        postcode: trim_optional(input.postcode),
        ..input
    };

    let mut extra = Vec::new();
    if let Err(msg) = validate_password_strength(&input.password, MIN_PASSWORD_LENGTH) {
        extra.push(FieldViolation::new("password", msg));
    }
    check_form(&input, "Invalid registration data", extra)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let customer = state
        .store
        .create_customer(&CreateCustomer {
            email: input.email,
            password_hash,
            first_name: input.first_name,
            last_name: input.last_name,
            phone: input.phone,
            address: input.address,
            suburb: input.suburb,
            postcode: input.postcode,
        })
        .await?;

    tracing::info!(customer_id = customer.id, "Customer registered");

    let token = issue_token(&state, &customer)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(AuthPayload {
            message: "Customer registered successfully",
            token,
            customer: customer.summary(),
        })),
    ))
}

/// POST /api/customer/login
///
/// Unknown email, inactive account and wrong password are indistinguishable.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthPayload>>> {
    let email = normalize_email(&input.email);
    if email.is_empty() || input.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".into(),
        ));
    }

    let customer = state
        .store
        .find_customer_by_email(&email)
        .await?
        .filter(|c| c.is_active)
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &customer.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(customer_id = customer.id, "Login rejected: wrong password");
        return Err(invalid_credentials());
    }

    tracing::info!(customer_id = customer.id, "Customer logged in");

    let token = issue_token(&state, &customer)?;
    Ok(Json(ApiResponse::ok(AuthPayload {
        message: "Login successful",
        token,
        customer: customer.summary(),
    })))
}

/// GET /api/customer/profile
pub async fn get_profile(auth: AuthCustomer) -> AppResult<Json<ApiResponse<ProfilePayload>>> {
    Ok(Json(ApiResponse::ok(ProfilePayload {
        message: None,
        customer: auth.customer.profile(),
    })))
}

/// PUT /api/customer/profile
///
/// Blank optional fields are ignored rather than clearing the stored value.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthCustomer,
    AppJson(input): AppJson<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<ProfilePayload>>> {
    let input = UpdateProfileRequest {
        first_name: input.first_name.map(|v| v.trim().to_string()),
        last_name: input.last_name.map(|v| v.trim().to_string()),
        phone: trim_optional(input.phone),
        address: trim_optional(input.address),
        suburb: trim_optional(input.suburb),
        postcode: trim_optional(input.postcode),
    };
    check_form(&input, "Invalid profile data", Vec::new())?;

    let id = auth.customer.id;
    let updated = state
        .store
        .update_customer(
            id,
            &UpdateCustomer {
                first_name: input.first_name,
                last_name: input.last_name,
                phone: input.phone,
                address: input.address,
                suburb: input.suburb,
                postcode: input.postcode,
            },
        )
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;

    tracing::info!(customer_id = id, "Customer profile updated");

    Ok(Json(ApiResponse::ok(ProfilePayload {
        message: Some("Profile updated successfully"),
        customer: updated.profile(),
    })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()))
}

fn issue_token(state: &AppState, customer: &Customer) -> AppResult<String> {
    generate_token(customer.id, &customer.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))
}
