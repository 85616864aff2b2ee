//! Environment-driven settings for the server, the facade and the binaries.
//!
//! Values are read on demand. Call `dotenv::dotenv().ok()` once at startup to pick up `.env`.

use anyhow::Context;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_STATIC_DIR: &str = "dist";
pub const DEFAULT_LOCAL_STORE_PATH: &str = "realtrust_local_storage.json";
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 300;

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Document database connection string (optional).
///
/// When unset the server falls back to an in-memory store.
pub fn database_url() -> Option<String> {
    non_empty_var("DATABASE_URL")
}

/// Listen port for the API server.
pub fn port() -> anyhow::Result<u16> {
    match non_empty_var("PORT") {
        Some(v) => v
            .trim()
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got {:?}", v)),
        None => Ok(DEFAULT_PORT),
    }
}

/// Directory holding the built frontend.
pub fn static_dir() -> PathBuf {
    non_empty_var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR))
}

/// Base URL the remote backend talks to, including the `/api` prefix.
pub fn api_base_url() -> String {
    non_empty_var("API_BASE_URL")
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// File backing local mode's persistent key-value store.
pub fn local_store_path() -> PathBuf {
    non_empty_var("LOCAL_STORE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOCAL_STORE_PATH))
}

/// Artificial latency applied to every local-mode operation.
pub fn simulated_delay() -> anyhow::Result<Duration> {
    let ms = match non_empty_var("SIMULATED_DELAY_MS") {
        Some(v) => v
            .trim()
            .parse::<u64>()
            .with_context(|| format!("SIMULATED_DELAY_MS must be a valid u64, got {:?}", v))?,
        None => DEFAULT_SIMULATED_DELAY_MS,
    };
    Ok(Duration::from_millis(ms))
}
