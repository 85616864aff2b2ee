// src/bin/api_server.rs

use anyhow::Context;
use realtrust::infra::{config, logging};
use realtrust::storage::document::{DocumentStore, MemoryDocumentStore, PostgresDocumentStore};
use realtrust::transport;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    // --- Document store ---
    let store: Arc<dyn DocumentStore> = match config::database_url() {
        Some(url) => {
            let store = PostgresDocumentStore::connect(&url)
                .await
                .context("failed to connect to the document database")?;
            tracing::info!("document database connected");
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store (data is lost on exit)");
            Arc::new(MemoryDocumentStore::new())
        }
    };

    // --- Router ---
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let mut app = transport::http::create_router(transport::http::AppState::new(store)).merge(
        SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
    );

    let static_dir = config::static_dir();
    if static_dir.is_dir() {
        tracing::info!(dir = %static_dir.display(), "serving frontend");
        app = transport::http::with_frontend(app, &static_dir);
    } else {
        tracing::info!(dir = %static_dir.display(), "static directory missing, API only");
    }
    let app = app.layer(cors).layer(TraceLayer::new_for_http());

    // --- Serve ---
    let port = config::port()?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;
    tracing::info!(port, "server running");
    tracing::info!("Swagger UI available at http://localhost:{}/swagger-ui", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
