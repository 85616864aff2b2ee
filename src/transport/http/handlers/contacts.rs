use crate::domain::identity::now_timestamp;
use crate::domain::model::{ContactSubmission, NewContactSubmission};
use crate::storage::document::{Sort, CONTACTS};
use crate::transport::http::handlers::common::{insert_draft, list_records};
use crate::transport::http::types::{ApiError, AppState, MessageResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/contacts",
    responses(
        (status = 200, description = "Contact submissions, newest first", body = [ContactSubmission]),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn list_contacts_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactSubmission>>, ApiError> {
    let contacts =
        list_records(state.store.as_ref(), CONTACTS, Sort::Descending("date")).await?;
    Ok(Json(contacts))
}

#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = NewContactSubmission,
    responses(
        (status = 200, description = "Submission saved", body = MessageResponse),
        (status = 422, description = "Invalid JSON body", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn create_contact_handler(
    State(state): State<AppState>,
    request: Result<Json<NewContactSubmission>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(draft) = request?;
    let doc = insert_draft(
        state.store.as_ref(),
        CONTACTS,
        &draft,
        Some(now_timestamp()),
    )
    .await?;
    tracing::info!(id = %doc.object_id, "contact submission saved");
    Ok(Json(MessageResponse::new("Contact saved")))
}
