//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO used for inserts
//!
//! Text columns holding enumerations decode through the matching
//! `primo_core::project` enum (`#[sqlx(try_from = "String")]`), so a row
//! with an unknown value fails to load instead of leaking through.

pub mod contact;
pub mod customer;
pub mod project;
pub mod project_document;
pub mod project_message;
pub mod project_update;
