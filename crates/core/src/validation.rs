//! Field-level validation results shared by every input form.
//!
//! Request DTOs derive [`validator::Validate`]; [`violations_from`] flattens
//! the resulting [`ValidationErrors`] into a stable, serialisable list that
//! the HTTP layer returns alongside a 400.

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Flatten `validator` errors into violations sorted by field name.
///
/// Rules declared without a custom message fall back to the rule code
/// (e.g. `"email"`, `"length"`) so every violation carries some text.
pub fn violations_from(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value ({})", err.code));
                FieldViolation::new(field.clone(), message)
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

/// Canonical form of an email address used for storage and lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Trim an optional free-text field, mapping blank input to `None`.
pub fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
