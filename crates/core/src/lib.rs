//! Domain logic for the Primo Pools backend.
//!
//! Nothing in this crate performs I/O: the chat classifier, lead
//! qualification, project lifecycle rules and input validation helpers are
//! all pure functions over their inputs, shared by the storage and HTTP
//! layers.

pub mod chat;
pub mod error;
pub mod lead;
pub mod project;
pub mod types;
pub mod validation;
