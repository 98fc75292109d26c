//! Request extractors that gate access to customer routes.
//!
//! - [`auth::AuthCustomer`] -- resolves a Bearer token to an active customer.

pub mod auth;
