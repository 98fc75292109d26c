//! Request handlers.
//!
//! Handlers validate input, delegate to the injected [`Store`] or
//! [`ChatResponder`] in [`AppState`], and map failures via [`AppError`].
//!
//! [`Store`]: primo_db::store::Store
//! [`ChatResponder`]: primo_core::chat::ChatResponder
//! [`AppState`]: crate::state::AppState

pub mod chat;
pub mod contact;
pub mod customer;
pub mod lead;
pub mod project;
pub mod seed;

use primo_core::validation::{violations_from, FieldViolation};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Run `validator` rules on a form, plus any violations found by hand.
///
/// Fails with [`AppError::InvalidFields`] listing every violation.
pub(crate) fn check_form<T: Validate>(
    form: &T,
    message: &str,
    extra: Vec<FieldViolation>,
) -> AppResult<()> {
    let mut violations = match form.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => violations_from(&errors),
    };
    violations.extend(extra);
    if violations.is_empty() {
        return Ok(());
    }
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    Err(AppError::InvalidFields {
        message: message.to_string(),
        errors: violations,
    })
}
