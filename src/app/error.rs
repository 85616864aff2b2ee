use crate::storage::kv::StorageError;

/// Failures a backend can report. The facade decides which ones reach the caller.
#[derive(Debug, thiserror::Error)]
pub enum FacadeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("stored collection {key} could not be decoded: {source}")]
    Decode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("collection could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("backend returned a record without an id")]
    MissingId,
}
