//! Document database behind the HTTP resource server.
//!
//! Documents are schemaless JSON objects grouped by collection name. The store owns identity:
//! every inserted document receives a native `_id`, and that name never leaks past the
//! transport layer, which maps it to `id` on the way out.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

pub mod memory;
pub mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PostgresDocumentStore;

pub const PROJECTS: &str = "projects";
pub const CLIENTS: &str = "clients";
pub const CONTACTS: &str = "contacts";
pub const SUBSCRIBERS: &str = "subscribers";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("document body must be a JSON object")]
    NotAnObject,
}

/// A stored document: native identity plus its body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub object_id: String,
    #[serde(flatten)]
    pub body: JsonMap<String, JsonValue>,
}

impl Document {
    pub fn field_str(&self, field: &str) -> Option<&str> {
        self.body.get(field).and_then(|v| v.as_str())
    }
}

/// Result ordering for [`DocumentStore::find`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sort<'a> {
    /// The order documents were inserted in.
    InsertionOrder,
    /// Descending by the string value of a body field; ties keep insertion order.
    Descending(&'a str),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find(&self, collection: &str, sort: Sort<'_>) -> Result<Vec<Document>, StoreError>;

    /// First document (in insertion order) whose `field` equals `value`.
    async fn find_one(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, StoreError>;

    async fn insert(
        &self,
        collection: &str,
        body: JsonMap<String, JsonValue>,
    ) -> Result<Document, StoreError>;

    /// Returns whether a document was removed. A missing id is not an error.
    async fn delete_by_id(&self, collection: &str, object_id: &str) -> Result<bool, StoreError>;

    /// Connectivity check used by `/health`.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Serializes a draft into a document body.
pub fn to_body<T: Serialize>(value: &T) -> Result<JsonMap<String, JsonValue>, StoreError> {
    match serde_json::to_value(value)? {
        JsonValue::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject),
    }
}
