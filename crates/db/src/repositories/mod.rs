//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async queries that
//! accept `&PgPool` as the first argument.

pub mod contact_repo;
pub mod customer_repo;
pub mod project_document_repo;
pub mod project_message_repo;
pub mod project_repo;
pub mod project_update_repo;

pub use contact_repo::ContactRepo;
pub use customer_repo::CustomerRepo;
pub use project_document_repo::ProjectDocumentRepo;
pub use project_message_repo::ProjectMessageRepo;
pub use project_repo::ProjectRepo;
pub use project_update_repo::ProjectUpdateRepo;
