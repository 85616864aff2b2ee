use crate::domain::model::{Client, NewClient};
use crate::storage::document::{Sort, CLIENTS};
use crate::transport::http::handlers::common::{insert_draft, list_records, to_record};
use crate::transport::http::types::{ApiError, AppState, MessageResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/clients",
    responses(
        (status = 200, description = "All clients, in insertion order", body = [Client]),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn list_clients_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Client>>, ApiError> {
    let clients = list_records(state.store.as_ref(), CLIENTS, Sort::InsertionOrder).await?;
    Ok(Json(clients))
}

#[utoipa::path(
    post,
    path = "/api/clients",
    request_body = NewClient,
    responses(
        (status = 200, description = "Saved client with its assigned id", body = Client),
        (status = 422, description = "Invalid JSON body", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn create_client_handler(
    State(state): State<AppState>,
    request: Result<Json<NewClient>, JsonRejection>,
) -> Result<Json<Client>, ApiError> {
    let Json(draft) = request?;
    let doc = insert_draft(state.store.as_ref(), CLIENTS, &draft, None).await?;
    tracing::info!(id = %doc.object_id, name = %draft.name, "client created");
    Ok(Json(to_record(doc)?))
}

#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    params(
        ("id" = String, Path, description = "Client id")
    ),
    responses(
        (status = 200, description = "Deleted, or nothing to delete", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn delete_client_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state.store.delete_by_id(CLIENTS, &id).await?;
    tracing::info!(%id, removed, "client delete");
    Ok(Json(MessageResponse::new("Client deleted")))
}
