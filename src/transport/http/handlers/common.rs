//! Boundary between stored documents and wire records.

use crate::storage::document::{to_body, Document, DocumentStore, Sort};
use crate::transport::http::types::ApiError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Maps a document to its record shape, renaming the native `_id` to `id`.
///
/// This is the only place the store's identity field name is known to the transport layer.
pub fn to_record<R: DeserializeOwned>(doc: Document) -> Result<R, serde_json::Error> {
    let Document {
        object_id,
        mut body,
    } = doc;
    body.remove("_id");
    body.insert("id".to_string(), JsonValue::String(object_id));
    serde_json::from_value(JsonValue::Object(body))
}

pub fn to_records<R: DeserializeOwned>(docs: Vec<Document>) -> Result<Vec<R>, serde_json::Error> {
    docs.into_iter().map(to_record).collect()
}

pub async fn list_records<R: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: &str,
    sort: Sort<'_>,
) -> Result<Vec<R>, ApiError> {
    let docs = store.find(collection, sort).await?;
    Ok(to_records(docs)?)
}

/// Stores `draft` as a new document. `date`, when given, overrides anything the caller sent.
pub async fn insert_draft<D: Serialize>(
    store: &dyn DocumentStore,
    collection: &str,
    draft: &D,
    date: Option<String>,
) -> Result<Document, ApiError> {
    let mut body = to_body(draft)?;
    body.remove("id");
    if let Some(date) = date {
        body.insert("date".to_string(), JsonValue::String(date));
    }
    Ok(store.insert(collection, body).await?)
}
