use crate::domain::identity::now_timestamp;
use crate::domain::model::{NewSubscriber, Subscriber};
use crate::storage::document::{Sort, SUBSCRIBERS};
use crate::transport::http::handlers::common::{insert_draft, list_records};
use crate::transport::http::types::{ApiError, AppState, MessageResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

pub const SUBSCRIBED: &str = "Subscribed successfully";
pub const ALREADY_SUBSCRIBED: &str = "Already subscribed";

#[utoipa::path(
    get,
    path = "/api/subscribers",
    responses(
        (status = 200, description = "Subscribers, newest first", body = [Subscriber]),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn list_subscribers_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Subscriber>>, ApiError> {
    let subscribers =
        list_records(state.store.as_ref(), SUBSCRIBERS, Sort::Descending("date")).await?;
    Ok(Json(subscribers))
}

/// Adds a subscriber unless the email is already present.
///
/// The lookup and the insert are separate store calls, so two concurrent requests for the
/// same new email can both insert.
#[utoipa::path(
    post,
    path = "/api/subscribers",
    request_body = NewSubscriber,
    responses(
        (status = 200, description = "Subscribed, or already subscribed", body = MessageResponse),
        (status = 422, description = "Invalid JSON body", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn create_subscriber_handler(
    State(state): State<AppState>,
    request: Result<Json<NewSubscriber>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(draft) = request?;
    if state
        .store
        .find_one(SUBSCRIBERS, "email", &draft.email)
        .await?
        .is_some()
    {
        tracing::debug!(email = %draft.email, "duplicate subscription ignored");
        return Ok(Json(MessageResponse::new(ALREADY_SUBSCRIBED)));
    }
    let doc = insert_draft(
        state.store.as_ref(),
        SUBSCRIBERS,
        &draft,
        Some(now_timestamp()),
    )
    .await?;
    tracing::info!(id = %doc.object_id, "subscriber added");
    Ok(Json(MessageResponse::new(SUBSCRIBED)))
}
