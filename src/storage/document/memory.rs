use super::{Document, DocumentStore, Sort, StoreError};
use crate::domain::identity::generate_object_id;
use async_trait::async_trait;
use serde_json::{Map as JsonMap, Value as JsonValue};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local document store. Used by tests and when no database is configured.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn find(&self, collection: &str, sort: Sort<'_>) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let mut docs = collections.get(collection).cloned().unwrap_or_default();
        if let Sort::Descending(field) = sort {
            // sort_by is stable, so equal keys stay in insertion order.
            docs.sort_by(|a, b| {
                let ka = a.field_str(field).unwrap_or("");
                let kb = b.field_str(field).unwrap_or("");
                kb.cmp(ka)
            });
        }
        Ok(docs)
    }

    async fn find_one(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.field_str(field) == Some(value)))
            .cloned())
    }

    async fn insert(
        &self,
        collection: &str,
        mut body: JsonMap<String, JsonValue>,
    ) -> Result<Document, StoreError> {
        body.remove("_id");
        let doc = Document {
            object_id: generate_object_id(),
            body,
        };
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(doc.clone());
        Ok(doc)
    }

    async fn delete_by_id(&self, collection: &str, object_id: &str) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|d| d.object_id != object_id);
        Ok(docs.len() != before)
    }
}
