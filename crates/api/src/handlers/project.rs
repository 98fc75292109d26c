//! Handlers for a customer's projects and their sub-resources.
//!
//! Every handler resolves the project through [`owned_project`], so a
//! project belonging to someone else is reported exactly like one that
//! does not exist.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use primo_core::error::CoreError;
use primo_core::project::{validate_message_text, SenderType};
use primo_core::types::DbId;
use primo_db::models::customer::Customer;
use primo_db::models::project::Project;
use primo_db::models::project_document::ProjectDocument;
use primo_db::models::project_message::{CreateProjectMessage, ProjectMessage};
use primo_db::models::project_update::ProjectUpdate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, ProjectId};
use crate::middleware::auth::AuthCustomer;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/customer/projects/{id}/messages`.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectList {
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    pub project: Project,
}

#[derive(Debug, Serialize)]
pub struct UpdateList {
    pub updates: Vec<ProjectUpdate>,
}

#[derive(Debug, Serialize)]
pub struct DocumentList {
    pub documents: Vec<ProjectDocument>,
}

#[derive(Debug, Serialize)]
pub struct MessageList {
    pub messages: Vec<ProjectMessage>,
}

#[derive(Debug, Serialize)]
pub struct MessageSent {
    pub message: &'static str,
    pub message_data: ProjectMessage,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/customer/projects
pub async fn list(
    State(state): State<AppState>,
    auth: AuthCustomer,
) -> AppResult<Json<ApiResponse<ProjectList>>> {
    let projects = state
        .store
        .list_projects_for_customer(auth.customer.id)
        .await?;
    Ok(Json(ApiResponse::ok(ProjectList { projects })))
}

/// GET /api/customer/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthCustomer,
    ProjectId(id): ProjectId,
) -> AppResult<Json<ApiResponse<ProjectDetail>>> {
    let project = owned_project(&state, &auth.customer, id).await?;
    Ok(Json(ApiResponse::ok(ProjectDetail { project })))
}

/// GET /api/customer/projects/{id}/updates
pub async fn list_updates(
    State(state): State<AppState>,
    auth: AuthCustomer,
    ProjectId(id): ProjectId,
) -> AppResult<Json<ApiResponse<UpdateList>>> {
    let project = owned_project(&state, &auth.customer, id).await?;
    let updates = state.store.list_project_updates(project.id).await?;
    Ok(Json(ApiResponse::ok(UpdateList { updates })))
}

/// GET /api/customer/projects/{id}/documents
pub async fn list_documents(
    State(state): State<AppState>,
    auth: AuthCustomer,
    ProjectId(id): ProjectId,
) -> AppResult<Json<ApiResponse<DocumentList>>> {
    let project = owned_project(&state, &auth.customer, id).await?;
    let documents = state.store.list_project_documents(project.id).await?;
    Ok(Json(ApiResponse::ok(DocumentList { documents })))
}

/// GET /api/customer/projects/{id}/messages
///
/// Returns the conversation in creation order, then marks the team's
/// messages as read. The returned rows show the read flags as they were
/// before this call.
pub async fn list_messages(
    State(state): State<AppState>,
    auth: AuthCustomer,
    ProjectId(id): ProjectId,
) -> AppResult<Json<ApiResponse<MessageList>>> {
    let project = owned_project(&state, &auth.customer, id).await?;
    let messages = state.store.list_project_messages(project.id).await?;

    let marked = state
        .store
        .mark_messages_read(project.id, SenderType::Team)
        .await?;
    if marked > 0 {
        tracing::debug!(project_id = project.id, marked, "Marked team messages read");
    }

    Ok(Json(ApiResponse::ok(MessageList { messages })))
}

/// POST /api/customer/projects/{id}/messages
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthCustomer,
    ProjectId(id): ProjectId,
    AppJson(input): AppJson<SendMessageRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<MessageSent>>)> {
    let text = validate_message_text(&input.message)?;
    let project = owned_project(&state, &auth.customer, id).await?;

    let message = state
        .store
        .create_project_message(&CreateProjectMessage {
            project_id: project.id,
            sender_id: Some(auth.customer.id),
            sender_name: auth.customer.full_name(),
            sender_type: SenderType::Customer,
            message: text,
        })
        .await?;

    tracing::info!(
        project_id = project.id,
        message_id = message.id,
        customer_id = auth.customer.id,
        "Customer message sent",
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(MessageSent {
            message: "Message sent successfully",
            message_data: message,
        })),
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a project the customer owns. Missing and foreign projects both
/// yield the same 404.
async fn owned_project(state: &AppState, customer: &Customer, id: DbId) -> AppResult<Project> {
    state
        .store
        .find_project(id)
        .await?
        .filter(|p| p.customer_id == customer.id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}
