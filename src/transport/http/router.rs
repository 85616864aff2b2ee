use crate::domain::model::{
    Client, ContactSubmission, NewClient, NewContactSubmission, NewProject, NewSubscriber,
    Project, Subscriber,
};
use crate::transport::http::handlers::{clients, contacts, health, projects, subscribers};
use crate::transport::http::types::{AppState, MessageResponse};
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get};
use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use utoipa::OpenApi;

/// Images arrive inline as data URIs, so request bodies can be large.
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        projects::list_projects_handler,
        projects::create_project_handler,
        projects::delete_project_handler,
        clients::list_clients_handler,
        clients::create_client_handler,
        clients::delete_client_handler,
        contacts::list_contacts_handler,
        contacts::create_contact_handler,
        subscribers::list_subscribers_handler,
        subscribers::create_subscriber_handler
    ),
    components(schemas(
        Project,
        NewProject,
        Client,
        NewClient,
        ContactSubmission,
        NewContactSubmission,
        Subscriber,
        NewSubscriber,
        MessageResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/projects",
            get(projects::list_projects_handler).post(projects::create_project_handler),
        )
        .route("/api/projects/:id", delete(projects::delete_project_handler))
        .route(
            "/api/clients",
            get(clients::list_clients_handler).post(clients::create_client_handler),
        )
        .route("/api/clients/:id", delete(clients::delete_client_handler))
        .route(
            "/api/contacts",
            get(contacts::list_contacts_handler).post(contacts::create_contact_handler),
        )
        .route(
            "/api/subscribers",
            get(subscribers::list_subscribers_handler)
                .post(subscribers::create_subscriber_handler),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(app_state)
}

/// Serves the built frontend for any path the API does not claim.
///
/// Unknown paths fall back to `index.html` so client-side routes resolve.
pub fn with_frontend(router: Router, static_dir: &Path) -> Router {
    let index = ServeFile::new(static_dir.join("index.html"));
    router.fallback_service(ServeDir::new(static_dir).fallback(index))
}
