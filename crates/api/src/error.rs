use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use primo_core::error::CoreError;
use primo_core::validation::FieldViolation;
use primo_db::store::StoreError;
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Every variant renders as `{ "success": false, "message", "code" }`,
/// plus `errors` for field-level validation failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage failure that is not a domain error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Form input failed one or more field rules.
    #[error("{message}")]
    InvalidFields {
        message: String,
        errors: Vec<FieldViolation>,
    },

    /// A path id that is not a number; reported like a missing row.
    #[error("{entity} not found")]
    UnknownId { entity: &'static str },

    /// No route matched the request path.
    #[error("Route not found")]
    RouteNotFound,

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(core) => AppError::Core(core),
            StoreError::Database(db) => AppError::Database(db),
        }
    }
}

/// Generic text for 401s; callers learn nothing about why a token failed.
pub const UNAUTHORIZED_MESSAGE: &str = "Authentication required";

const INTERNAL_MESSAGE: &str = "An internal error occurred";

#[derive(Serialize)]
struct ErrorBody<'a> {
    success: bool,
    message: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [FieldViolation]>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        INTERNAL_MESSAGE.to_string(),
                    )
                }
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InvalidFields { message, .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message.clone())
            }
            AppError::UnknownId { entity } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} not found"),
            ),
            AppError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Route not found".to_string(),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };

        let errors = match &self {
            AppError::InvalidFields { errors, .. } => Some(errors.as_slice()),
            _ => None,
        };

        let body = ErrorBody {
            success: false,
            message,
            code,
            errors,
        };

        (status, axum::Json(body)).into_response()
    }
}
