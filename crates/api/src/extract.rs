//! Request extractors whose rejections render as the JSON error envelope.
//!
//! axum's own `Json` and `Path` reject with plain-text bodies; handlers use
//! [`AppJson`] and the id extractors below instead so that malformed input
//! is reported like any other [`AppError`].

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;
use primo_core::types::DbId;
use primo_core::validation::FieldViolation;

use crate::error::AppError;

/// JSON request body. Syntax errors become a 400 `BAD_REQUEST`; a body
/// that parses but has the wrong shape becomes a 400 `VALIDATION_ERROR`
/// naming the offending field.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                let text = err.body_text();
                let detail = text.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(&text);
                match split_field_path(detail) {
                    Some((field, message)) => AppError::InvalidFields {
                        message: "Invalid request body".to_string(),
                        errors: vec![FieldViolation::new(field, message)],
                    },
                    None => AppError::Core(primo_core::error::CoreError::Validation(
                        detail.to_string(),
                    )),
                }
            }
            JsonRejection::JsonSyntaxError(_) => {
                AppError::BadRequest("Request body is not valid JSON".into())
            }
            JsonRejection::MissingJsonContentType(_) => {
                AppError::BadRequest("Expected a JSON body with Content-Type: application/json".into())
            }
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

/// Split `"budget: invalid type: ..."` into the field path and the message.
///
/// Errors at the document root carry no path, and their text starts with a
/// phrase containing spaces (`"invalid type: ..."`, `"missing field ..."`),
/// which is how the two cases are told apart.
fn split_field_path(detail: &str) -> Option<(&str, &str)> {
    let (head, rest) = detail.split_once(": ")?;
    if head.is_empty() || head.contains(char::is_whitespace) {
        return None;
    }
    Some((head, rest))
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Declares a single-segment id extractor. A segment that is not an integer
/// is reported as the same 404 as an id that does not exist.
macro_rules! id_extractor {
    ($(#[$meta:meta])* $name:ident, $entity:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub DbId);

        impl<S: Send + Sync> FromRequestParts<S> for $name {
            type Rejection = AppError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &S,
            ) -> Result<Self, Self::Rejection> {
                let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
                raw.trim().parse().map($name).map_err(|_| {
                    tracing::debug!(raw = %raw, entity = $entity, "Non-numeric id in path");
                    AppError::UnknownId { entity: $entity }
                })
            }
        }
    };
}

id_extractor! {
    /// `{id}` segment of `/contacts/{id}`.
    ContactId, "Contact"
}

id_extractor! {
    /// `{id}` segment of `/customer/projects/{id}/...`.
    ProjectId, "Project"
}
