//! JWT-based customer authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use primo_core::error::CoreError;
use primo_db::models::customer::Customer;

use crate::auth::jwt::validate_token;
use crate::error::{AppError, UNAUTHORIZED_MESSAGE};
use crate::state::AppState;

/// The active customer behind the request's Bearer token.
///
/// Rejects with a 401 carrying [`UNAUTHORIZED_MESSAGE`] whether the header
/// is missing, the token is malformed, expired or forged, or the account
/// no longer exists or is inactive.
///
/// ```ignore
/// async fn profile(auth: AuthCustomer) -> AppResult<Json<...>> {
///     tracing::debug!(customer_id = auth.customer.id, "profile");
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthCustomer {
    pub customer: Customer,
}

fn unauthorized() -> AppError {
    AppError::Core(CoreError::Unauthorized(UNAUTHORIZED_MESSAGE.into()))
}

impl FromRequestParts<AppState> for AuthCustomer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(unauthorized)?;

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            unauthorized()
        })?;

        let customer = state
            .store
            .find_customer(claims.sub)
            .await?
            .filter(|c| c.is_active)
            .ok_or_else(|| {
                tracing::debug!(customer_id = claims.sub, "Token for missing or inactive customer");
                unauthorized()
            })?;

        Ok(AuthCustomer { customer })
    }
}
