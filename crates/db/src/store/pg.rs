//! Postgres-backed [`Store`].

use async_trait::async_trait;
use primo_core::error::CoreError;
use primo_core::project::SenderType;
use primo_core::types::DbId;

use super::{check_new_project, check_new_update, Store, StoreError, StoreResult, DUPLICATE_EMAIL};
use crate::models::contact::{Contact, CreateContact};
use crate::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use crate::models::project::{AdvanceProject, CreateProject, Project};
use crate::models::project_document::{CreateProjectDocument, ProjectDocument};
use crate::models::project_message::{CreateProjectMessage, ProjectMessage};
use crate::models::project_update::{CreateProjectUpdate, ProjectUpdate};
use crate::repositories::{
    ContactRepo, CustomerRepo, ProjectDocumentRepo, ProjectMessageRepo, ProjectRepo,
    ProjectUpdateRepo,
};
use crate::DbPool;

/// Unique constraint guarding customer emails.
const EMAIL_CONSTRAINT: &str = "uq_customers_email";

/// [`Store`] that delegates to the repository layer.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    async fn require_customer(&self, id: DbId) -> StoreResult<()> {
        match CustomerRepo::find_by_id(&self.pool, id).await? {
            Some(_) => Ok(()),
            None => Err(CoreError::NotFound {
                entity: "Customer",
                id,
            }
            .into()),
        }
    }

    async fn require_project(&self, id: DbId) -> StoreResult<()> {
        match ProjectRepo::find_by_id(&self.pool, id).await? {
            Some(_) => Ok(()),
            None => Err(CoreError::NotFound {
                entity: "Project",
                id,
            }
            .into()),
        }
    }
}

/// Map a unique violation on the email constraint to a conflict.
fn map_customer_insert_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505")
            && db_err.constraint() == Some(EMAIL_CONSTRAINT)
        {
            tracing::debug!(constraint = EMAIL_CONSTRAINT, "Customer insert hit unique email constraint");
            return CoreError::Conflict(DUPLICATE_EMAIL.to_string()).into();
        }
    }
    err.into()
}

#[async_trait]
impl Store for PgStore {
    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn create_contact(&self, input: &CreateContact) -> StoreResult<Contact> {
        Ok(ContactRepo::create(&self.pool, input).await?)
    }

    async fn list_contacts(&self) -> StoreResult<Vec<Contact>> {
        Ok(ContactRepo::list(&self.pool).await?)
    }

    async fn find_contact(&self, id: DbId) -> StoreResult<Option<Contact>> {
        Ok(ContactRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_customer(&self, id: DbId) -> StoreResult<Option<Customer>> {
        Ok(CustomerRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_customer_by_email(&self, email: &str) -> StoreResult<Option<Customer>> {
        Ok(CustomerRepo::find_by_email(&self.pool, email).await?)
    }

    async fn create_customer(&self, input: &CreateCustomer) -> StoreResult<Customer> {
        CustomerRepo::create(&self.pool, input)
            .await
            .map_err(map_customer_insert_error)
    }

    async fn update_customer(
        &self,
        id: DbId,
        input: &UpdateCustomer,
    ) -> StoreResult<Option<Customer>> {
        Ok(CustomerRepo::update(&self.pool, id, input).await?)
    }

    async fn deactivate_customer(&self, id: DbId) -> StoreResult<bool> {
        Ok(CustomerRepo::deactivate(&self.pool, id).await?)
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_projects_for_customer(&self, customer_id: DbId) -> StoreResult<Vec<Project>> {
        Ok(ProjectRepo::list_for_customer(&self.pool, customer_id).await?)
    }

    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project> {
        check_new_project(input)?;
        self.require_customer(input.customer_id).await?;
        let project = ProjectRepo::create(&self.pool, input).await?;
        tracing::info!(project_id = project.id, customer_id = project.customer_id, "Project created");
        Ok(project)
    }

    async fn advance_project(
        &self,
        id: DbId,
        input: &AdvanceProject,
    ) -> StoreResult<Option<Project>> {
        ProjectRepo::advance(&self.pool, id, input)
            .await
            .inspect_err(|e| tracing::warn!(project_id = id, error = %e, "Project advance rejected"))
    }

    async fn list_project_updates(&self, project_id: DbId) -> StoreResult<Vec<ProjectUpdate>> {
        Ok(ProjectUpdateRepo::list_for_project(&self.pool, project_id).await?)
    }

    async fn create_project_update(
        &self,
        input: &CreateProjectUpdate,
    ) -> StoreResult<ProjectUpdate> {
        check_new_update(input)?;
        self.require_project(input.project_id).await?;
        Ok(ProjectUpdateRepo::create(&self.pool, input).await?)
    }

    async fn list_project_documents(
        &self,
        project_id: DbId,
    ) -> StoreResult<Vec<ProjectDocument>> {
        Ok(ProjectDocumentRepo::list_for_project(&self.pool, project_id).await?)
    }

    async fn create_project_document(
        &self,
        input: &CreateProjectDocument,
    ) -> StoreResult<ProjectDocument> {
        self.require_project(input.project_id).await?;
        Ok(ProjectDocumentRepo::create(&self.pool, input).await?)
    }

    async fn list_project_messages(&self, project_id: DbId) -> StoreResult<Vec<ProjectMessage>> {
        Ok(ProjectMessageRepo::list_for_project(&self.pool, project_id).await?)
    }

    async fn create_project_message(
        &self,
        input: &CreateProjectMessage,
    ) -> StoreResult<ProjectMessage> {
        self.require_project(input.project_id).await?;
        Ok(ProjectMessageRepo::create(&self.pool, input).await?)
    }

    async fn mark_messages_read(
        &self,
        project_id: DbId,
        sender_type: SenderType,
    ) -> StoreResult<u64> {
        Ok(ProjectMessageRepo::mark_read_from(&self.pool, project_id, sender_type).await?)
    }
}
