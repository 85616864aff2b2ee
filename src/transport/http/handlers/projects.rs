use crate::domain::model::{NewProject, Project};
use crate::storage::document::{Sort, PROJECTS};
use crate::transport::http::handlers::common::{insert_draft, list_records, to_record};
use crate::transport::http::types::{ApiError, AppState, MessageResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "All projects, in insertion order", body = [Project]),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn list_projects_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = list_records(state.store.as_ref(), PROJECTS, Sort::InsertionOrder).await?;
    Ok(Json(projects))
}

#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = NewProject,
    responses(
        (status = 200, description = "Saved project with its assigned id", body = Project),
        (status = 422, description = "Invalid JSON body", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn create_project_handler(
    State(state): State<AppState>,
    request: Result<Json<NewProject>, JsonRejection>,
) -> Result<Json<Project>, ApiError> {
    let Json(draft) = request?;
    let doc = insert_draft(state.store.as_ref(), PROJECTS, &draft, None).await?;
    tracing::info!(id = %doc.object_id, name = %draft.name, "project created");
    Ok(Json(to_record(doc)?))
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(
        ("id" = String, Path, description = "Project id")
    ),
    responses(
        (status = 200, description = "Deleted, or nothing to delete", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn delete_project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state.store.delete_by_id(PROJECTS, &id).await?;
    tracing::info!(%id, removed, "project delete");
    Ok(Json(MessageResponse::new("Project deleted")))
}
