//! Storage abstraction used by the HTTP layer.
//!
//! [`Store`] is the injected dependency: the server runs against
//! [`PgStore`] when a database is configured and [`MemStore`] otherwise.
//! Both backends enforce the same rules (unique customer email, project
//! lifecycle via [`primo_core::project::plan_advance`], progress range).

pub mod memory;
pub mod pg;

use async_trait::async_trait;
use primo_core::error::CoreError;
use primo_core::project::SenderType;
use primo_core::types::DbId;

use crate::models::contact::{Contact, CreateContact};
use crate::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use crate::models::project::{AdvanceProject, CreateProject, Project};
use crate::models::project_document::{CreateProjectDocument, ProjectDocument};
use crate::models::project_message::{CreateProjectMessage, ProjectMessage};
use crate::models::project_update::{CreateProjectUpdate, ProjectUpdate};

pub use memory::MemStore;
pub use pg::PgStore;

/// Message returned when registering an email that is already taken.
pub const DUPLICATE_EMAIL: &str = "Customer already exists with this email";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for contacts, customers and projects.
#[async_trait]
pub trait Store: Send + Sync {
    /// Liveness check of the backing storage.
    async fn health_check(&self) -> StoreResult<()>;

    // -- contacts --

    async fn create_contact(&self, input: &CreateContact) -> StoreResult<Contact>;
    /// All submissions, oldest first.
    async fn list_contacts(&self) -> StoreResult<Vec<Contact>>;
    async fn find_contact(&self, id: DbId) -> StoreResult<Option<Contact>>;

    // -- customers --

    async fn find_customer(&self, id: DbId) -> StoreResult<Option<Customer>>;
    async fn find_customer_by_email(&self, email: &str) -> StoreResult<Option<Customer>>;
    /// Fails with [`CoreError::Conflict`] if the email is already taken.
    async fn create_customer(&self, input: &CreateCustomer) -> StoreResult<Customer>;
    async fn update_customer(
        &self,
        id: DbId,
        input: &UpdateCustomer,
    ) -> StoreResult<Option<Customer>>;
    async fn deactivate_customer(&self, id: DbId) -> StoreResult<bool>;

    // -- projects --

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>>;
    /// A customer's projects, newest first.
    async fn list_projects_for_customer(&self, customer_id: DbId) -> StoreResult<Vec<Project>>;
    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project>;
    /// Apply a lifecycle change. `None` if the project does not exist.
    async fn advance_project(
        &self,
        id: DbId,
        input: &AdvanceProject,
    ) -> StoreResult<Option<Project>>;

    // -- project updates / documents --

    /// Newest first.
    async fn list_project_updates(&self, project_id: DbId) -> StoreResult<Vec<ProjectUpdate>>;
    async fn create_project_update(&self, input: &CreateProjectUpdate)
        -> StoreResult<ProjectUpdate>;
    /// Newest first.
    async fn list_project_documents(&self, project_id: DbId)
        -> StoreResult<Vec<ProjectDocument>>;
    async fn create_project_document(
        &self,
        input: &CreateProjectDocument,
    ) -> StoreResult<ProjectDocument>;

    // -- project messages --

    /// Creation order.
    async fn list_project_messages(&self, project_id: DbId) -> StoreResult<Vec<ProjectMessage>>;
    async fn create_project_message(
        &self,
        input: &CreateProjectMessage,
    ) -> StoreResult<ProjectMessage>;
    /// Mark unread messages written by `sender_type` as read; returns how
    /// many changed.
    async fn mark_messages_read(&self, project_id: DbId, sender_type: SenderType)
        -> StoreResult<u64>;
}

/// Range-check the optional numeric fields of a new project.
pub(crate) fn check_new_project(input: &CreateProject) -> Result<(), CoreError> {
    if let Some(progress) = input.progress_percentage {
        primo_core::project::validate_progress(progress)?;
    }
    if input.budget.is_some_and(|b| b < 0) {
        return Err(CoreError::Validation("Budget cannot be negative".to_string()));
    }
    Ok(())
}

pub(crate) fn check_new_update(input: &CreateProjectUpdate) -> Result<(), CoreError> {
    match input.progress_percentage {
        Some(progress) => primo_core::project::validate_progress(progress),
        None => Ok(()),
    }
}
