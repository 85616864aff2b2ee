#![allow(dead_code)]

use realtrust::storage::document::DocumentStore;
use realtrust::transport;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Starts the API in-process on an ephemeral port. Returns the server origin.
pub async fn spawn_server(
    store: Arc<dyn DocumentStore>,
) -> Result<(String, JoinHandle<()>), Box<dyn std::error::Error>> {
    let router = transport::http::create_router(transport::http::AppState::new(store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok((format!("http://127.0.0.1:{}", port), handle))
}

/// An origin nothing is listening on.
pub async fn closed_origin() -> Result<String, Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(format!("http://127.0.0.1:{}", port))
}
