//! In-memory [`Store`] for tests and database-less development.
//!
//! Tables are plain vectors behind a single [`RwLock`]; ids are assigned
//! from one shared counter, so insertion order and id order agree.

use async_trait::async_trait;
use chrono::Utc;
use primo_core::error::CoreError;
use primo_core::project::{plan_advance, ProjectStatus, SenderType};
use primo_core::types::DbId;
use tokio::sync::RwLock;

use super::{check_new_project, check_new_update, Store, StoreResult, DUPLICATE_EMAIL};
use crate::models::contact::{Contact, CreateContact};
use crate::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use crate::models::project::{AdvanceProject, CreateProject, Project};
use crate::models::project_document::{CreateProjectDocument, ProjectDocument};
use crate::models::project_message::{CreateProjectMessage, ProjectMessage};
use crate::models::project_update::{CreateProjectUpdate, ProjectUpdate};

#[derive(Debug, Default)]
struct Tables {
    next_id: DbId,
    contacts: Vec<Contact>,
    customers: Vec<Customer>,
    projects: Vec<Project>,
    updates: Vec<ProjectUpdate>,
    documents: Vec<ProjectDocument>,
    messages: Vec<ProjectMessage>,
}

impl Tables {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }

    fn require_customer(&self, id: DbId) -> Result<(), CoreError> {
        if self.customers.iter().any(|c| c.id == id) {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: "Customer",
                id,
            })
        }
    }

    fn require_project(&self, id: DbId) -> Result<(), CoreError> {
        if self.projects.iter().any(|p| p.id == id) {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: "Project",
                id,
            })
        }
    }
}

/// Volatile [`Store`]; everything is lost when the process exits.
#[derive(Debug, Default)]
pub struct MemStore {
    tables: RwLock<Tables>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_contact(&self, input: &CreateContact) -> StoreResult<Contact> {
        let mut tables = self.tables.write().await;
        let contact = Contact {
            id: tables.next_id(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            suburb: input.suburb.clone(),
            project_type: input.project_type.clone(),
            budget: input.budget,
            message: input.message.clone(),
            created_at: Utc::now(),
        };
        tables.contacts.push(contact.clone());
        tracing::debug!(contact_id = contact.id, "In-memory contact created");
        Ok(contact)
    }

    async fn list_contacts(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.tables.read().await.contacts.clone())
    }

    async fn find_contact(&self, id: DbId) -> StoreResult<Option<Contact>> {
        let tables = self.tables.read().await;
        Ok(tables.contacts.iter().find(|c| c.id == id).cloned())
    }

    async fn find_customer(&self, id: DbId) -> StoreResult<Option<Customer>> {
        let tables = self.tables.read().await;
        Ok(tables.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn find_customer_by_email(&self, email: &str) -> StoreResult<Option<Customer>> {
        let tables = self.tables.read().await;
        Ok(tables.customers.iter().find(|c| c.email == email).cloned())
    }

    async fn create_customer(&self, input: &CreateCustomer) -> StoreResult<Customer> {
        let mut tables = self.tables.write().await;
        if tables.customers.iter().any(|c| c.email == input.email) {
            tracing::debug!("Rejected customer with duplicate email");
            return Err(CoreError::Conflict(DUPLICATE_EMAIL.to_string()).into());
        }
        let now = Utc::now();
        let customer = Customer {
            id: tables.next_id(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            phone: input.phone.clone(),
            address: input.address.clone(),
            suburb: input.suburb.clone(),
            postcode: input.postcode.clone(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        tables.customers.push(customer.clone());
        Ok(customer)
    }

    async fn update_customer(
        &self,
        id: DbId,
        input: &UpdateCustomer,
    ) -> StoreResult<Option<Customer>> {
        let mut tables = self.tables.write().await;
        let Some(customer) = tables.customers.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        if let Some(v) = &input.first_name {
            customer.first_name = v.clone();
        }
        if let Some(v) = &input.last_name {
            customer.last_name = v.clone();
        }
        if let Some(v) = &input.phone {
            customer.phone = Some(v.clone());
        }
        if let Some(v) = &input.address {
            customer.address = Some(v.clone());
        }
        if let Some(v) = &input.suburb {
            customer.suburb = Some(v.clone());
        }
        if let Some(v) = &input.postcode {
            customer.postcode = Some(v.clone());
        }
        customer.updated_at = Utc::now();
        Ok(Some(customer.clone()))
    }

    async fn deactivate_customer(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        match tables
            .customers
            .iter_mut()
            .find(|c| c.id == id && c.is_active)
        {
            Some(customer) => {
                customer.is_active = false;
                customer.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        let tables = self.tables.read().await;
        Ok(tables.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn list_projects_for_customer(&self, customer_id: DbId) -> StoreResult<Vec<Project>> {
        let tables = self.tables.read().await;
        Ok(tables
            .projects
            .iter()
            .rev()
            .filter(|p| p.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project> {
        check_new_project(input)?;
        let mut tables = self.tables.write().await;
        tables.require_customer(input.customer_id)?;
        let now = Utc::now();
        let project = Project {
            id: tables.next_id(),
            customer_id: input.customer_id,
            title: input.title.clone(),
            description: input.description.clone(),
            project_type: input.project_type,
            status: input.status.unwrap_or(ProjectStatus::Planning),
            budget: input.budget,
            estimated_start_date: input.estimated_start_date,
            estimated_end_date: input.estimated_end_date,
            actual_start_date: input.actual_start_date,
            actual_end_date: input.actual_end_date,
            progress_percentage: input.progress_percentage.unwrap_or(0),
            created_at: now,
            updated_at: now,
        };
        tables.projects.push(project.clone());
        tracing::debug!(project_id = project.id, customer_id = project.customer_id, "In-memory project created");
        Ok(project)
    }

    async fn advance_project(
        &self,
        id: DbId,
        input: &AdvanceProject,
    ) -> StoreResult<Option<Project>> {
        let mut tables = self.tables.write().await;
        let Some(project) = tables.projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        let (status, progress) = plan_advance(
            project.status,
            project.progress_percentage,
            input.status,
            input.progress_percentage,
        )
        .inspect_err(|e| tracing::warn!(project_id = id, error = %e, "Project advance rejected"))?;

        let now = Utc::now();
        if status >= ProjectStatus::Construction && project.actual_start_date.is_none() {
            project.actual_start_date = Some(now);
        }
        if status == ProjectStatus::Completed && project.actual_end_date.is_none() {
            project.actual_end_date = Some(now);
        }
        project.status = status;
        project.progress_percentage = progress;
        project.updated_at = now;
        Ok(Some(project.clone()))
    }

    async fn list_project_updates(&self, project_id: DbId) -> StoreResult<Vec<ProjectUpdate>> {
        let tables = self.tables.read().await;
        Ok(tables
            .updates
            .iter()
            .rev()
            .filter(|u| u.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn create_project_update(
        &self,
        input: &CreateProjectUpdate,
    ) -> StoreResult<ProjectUpdate> {
        check_new_update(input)?;
        let mut tables = self.tables.write().await;
        tables.require_project(input.project_id)?;
        let update = ProjectUpdate {
            id: tables.next_id(),
            project_id: input.project_id,
            title: input.title.clone(),
            description: input.description.clone(),
            update_type: input.update_type,
            progress_percentage: input.progress_percentage,
            images: input.images.clone(),
            created_at: Utc::now(),
        };
        tables.updates.push(update.clone());
        tracing::debug!(update_id = update.id, project_id = update.project_id, "In-memory project update created");
        Ok(update)
    }

    async fn list_project_documents(
        &self,
        project_id: DbId,
    ) -> StoreResult<Vec<ProjectDocument>> {
        let tables = self.tables.read().await;
        Ok(tables
            .documents
            .iter()
            .rev()
            .filter(|d| d.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn create_project_document(
        &self,
        input: &CreateProjectDocument,
    ) -> StoreResult<ProjectDocument> {
        let mut tables = self.tables.write().await;
        tables.require_project(input.project_id)?;
        let document = ProjectDocument {
            id: tables.next_id(),
            project_id: input.project_id,
            title: input.title.clone(),
            description: input.description.clone(),
            document_type: input.document_type,
            file_url: input.file_url.clone(),
            uploaded_at: Utc::now(),
        };
        tables.documents.push(document.clone());
        tracing::debug!(document_id = document.id, project_id = document.project_id, "In-memory project document created");
        Ok(document)
    }

    async fn list_project_messages(&self, project_id: DbId) -> StoreResult<Vec<ProjectMessage>> {
        let tables = self.tables.read().await;
        Ok(tables
            .messages
            .iter()
            .filter(|m| m.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn create_project_message(
        &self,
        input: &CreateProjectMessage,
    ) -> StoreResult<ProjectMessage> {
        let mut tables = self.tables.write().await;
        tables.require_project(input.project_id)?;
        let message = ProjectMessage {
            id: tables.next_id(),
            project_id: input.project_id,
            sender_id: input.sender_id,
            sender_name: input.sender_name.clone(),
            sender_type: input.sender_type,
            message: input.message.clone(),
            is_read: false,
            created_at: Utc::now(),
        };
        tables.messages.push(message.clone());
        tracing::debug!(message_id = message.id, project_id = message.project_id, "In-memory project message created");
        Ok(message)
    }

    async fn mark_messages_read(
        &self,
        project_id: DbId,
        sender_type: SenderType,
    ) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        let mut changed = 0;
        for message in tables
            .messages
            .iter_mut()
            .filter(|m| m.project_id == project_id && m.sender_type == sender_type && !m.is_read)
        {
            message.is_read = true;
            changed += 1;
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use primo_core::project::{ProjectType, UpdateType};

    use super::*;
    use crate::store::StoreError;

    fn new_customer(email: &str) -> CreateCustomer {
        CreateCustomer {
            email: email.to_string(),
            password_hash: "$argon2id$stub".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone: None,
            address: None,
            suburb: None,
            postcode: None,
        }
    }

    fn new_project(customer_id: DbId, title: &str) -> CreateProject {
        CreateProject {
            customer_id,
            title: title.to_string(),
            description: None,
            project_type: ProjectType::NewConstruction,
            status: None,
            budget: Some(50_000),
            estimated_start_date: None,
            estimated_end_date: None,
            actual_start_date: None,
            actual_end_date: None,
            progress_percentage: None,
        }
    }

    fn new_message(project_id: DbId, sender_type: SenderType, text: &str) -> CreateProjectMessage {
        CreateProjectMessage {
            project_id,
            sender_id: None,
            sender_name: "Someone".to_string(),
            sender_type,
            message: text.to_string(),
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let store = MemStore::new();
        store.create_customer(&new_customer("a@example.com")).await.unwrap();

        let err = store
            .create_customer(&new_customer("a@example.com"))
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::Core(CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn new_customers_are_active() {
        let store = MemStore::new();
        let customer = store.create_customer(&new_customer("a@example.com")).await.unwrap();
        assert!(customer.is_active);

        assert!(store.deactivate_customer(customer.id).await.unwrap());
        assert!(!store.deactivate_customer(customer.id).await.unwrap());
        let reloaded = store.find_customer(customer.id).await.unwrap().unwrap();
        assert!(!reloaded.is_active);
    }

    #[tokio::test]
    async fn profile_update_only_touches_given_fields() {
        let store = MemStore::new();
        let customer = store.create_customer(&new_customer("a@example.com")).await.unwrap();

        let updated = store
            .update_customer(
                customer.id,
                &UpdateCustomer {
                    suburb: Some("Subiaco".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.suburb.as_deref(), Some("Subiaco"));
        assert_eq!(updated.first_name, "Jane");
        assert_eq!(updated.email, "a@example.com");
    }

    #[tokio::test]
    async fn projects_listed_newest_first_per_customer() {
        let store = MemStore::new();
        let a = store.create_customer(&new_customer("a@example.com")).await.unwrap();
        let b = store.create_customer(&new_customer("b@example.com")).await.unwrap();
        store.create_project(&new_project(a.id, "first")).await.unwrap();
        store.create_project(&new_project(b.id, "other")).await.unwrap();
        store.create_project(&new_project(a.id, "second")).await.unwrap();

        let titles: Vec<String> = store
            .list_projects_for_customer(a.id)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["second", "first"]);
    }

    #[tokio::test]
    async fn project_requires_existing_customer() {
        let store = MemStore::new();
        let err = store.create_project(&new_project(99, "orphan")).await.unwrap_err();
        assert_matches!(
            err,
            StoreError::Core(CoreError::NotFound { entity: "Customer", id: 99 })
        );
    }

    #[tokio::test]
    async fn project_progress_out_of_range_rejected() {
        let store = MemStore::new();
        let a = store.create_customer(&new_customer("a@example.com")).await.unwrap();
        let mut input = new_project(a.id, "bad");
        input.progress_percentage = Some(101);
        assert_matches!(
            store.create_project(&input).await,
            Err(StoreError::Core(CoreError::Validation(_)))
        );
    }

    #[tokio::test]
    async fn advance_moves_forward_and_stamps_dates() {
        let store = MemStore::new();
        let a = store.create_customer(&new_customer("a@example.com")).await.unwrap();
        let project = store.create_project(&new_project(a.id, "pool")).await.unwrap();

        let advanced = store
            .advance_project(
                project.id,
                &AdvanceProject {
                    status: Some(ProjectStatus::Construction),
                    progress_percentage: Some(40),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(advanced.status, ProjectStatus::Construction);
        assert_eq!(advanced.progress_percentage, 40);
        assert!(advanced.actual_start_date.is_some());
        assert!(advanced.actual_end_date.is_none());

        let completed = store
            .advance_project(
                project.id,
                &AdvanceProject {
                    status: Some(ProjectStatus::Completed),
                    progress_percentage: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(completed.progress_percentage, 100);
        assert!(completed.actual_end_date.is_some());
    }

    #[tokio::test]
    async fn advance_rejects_regression_and_leaves_row_unchanged() {
        let store = MemStore::new();
        let a = store.create_customer(&new_customer("a@example.com")).await.unwrap();
        let mut input = new_project(a.id, "pool");
        input.status = Some(ProjectStatus::Permits);
        input.progress_percentage = Some(30);
        let project = store.create_project(&input).await.unwrap();

        let err = store
            .advance_project(
                project.id,
                &AdvanceProject {
                    status: Some(ProjectStatus::Design),
                    progress_percentage: None,
                },
            )
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::Core(CoreError::Validation(_)));

        let reloaded = store.find_project(project.id).await.unwrap().unwrap();
        assert_eq!(reloaded.status, ProjectStatus::Permits);
        assert_eq!(reloaded.progress_percentage, 30);
    }

    #[tokio::test]
    async fn advance_missing_project_is_none() {
        let store = MemStore::new();
        let result = store
            .advance_project(7, &AdvanceProject::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn updates_listed_newest_first() {
        let store = MemStore::new();
        let a = store.create_customer(&new_customer("a@example.com")).await.unwrap();
        let project = store.create_project(&new_project(a.id, "pool")).await.unwrap();
        for title in ["dig", "pour"] {
            store
                .create_project_update(&CreateProjectUpdate {
                    project_id: project.id,
                    title: title.to_string(),
                    description: String::new(),
                    update_type: UpdateType::Progress,
                    progress_percentage: None,
                    images: vec![],
                })
                .await
                .unwrap();
        }
        let updates = store.list_project_updates(project.id).await.unwrap();
        assert_eq!(updates[0].title, "pour");
        assert_eq!(updates[1].title, "dig");
    }

    #[tokio::test]
    async fn messages_keep_creation_order_and_mark_read_by_sender() {
        let store = MemStore::new();
        let a = store.create_customer(&new_customer("a@example.com")).await.unwrap();
        let project = store.create_project(&new_project(a.id, "pool")).await.unwrap();
        store
            .create_project_message(&new_message(project.id, SenderType::Team, "one"))
            .await
            .unwrap();
        store
            .create_project_message(&new_message(project.id, SenderType::Customer, "two"))
            .await
            .unwrap();
        store
            .create_project_message(&new_message(project.id, SenderType::Team, "three"))
            .await
            .unwrap();

        assert_eq!(
            store.mark_messages_read(project.id, SenderType::Team).await.unwrap(),
            2
        );
        assert_eq!(
            store.mark_messages_read(project.id, SenderType::Team).await.unwrap(),
            0
        );

        let messages = store.list_project_messages(project.id).await.unwrap();
        let texts: Vec<&str> = messages.iter().map(|m| m.message.as_str()).collect();
        assert_eq!(texts, ["one", "two", "three"]);
        assert!(messages[0].is_read);
        assert!(!messages[1].is_read);
        assert!(messages[2].is_read);
    }

    #[tokio::test]
    async fn message_for_missing_project_is_not_found() {
        let store = MemStore::new();
        let err = store
            .create_project_message(&new_message(5, SenderType::Customer, "hello"))
            .await
            .unwrap_err();
        assert_matches!(
            err,
            StoreError::Core(CoreError::NotFound { entity: "Project", .. })
        );
    }
}
