//! Persistent document store using PostgreSQL.
//!
//! All collections share one `documents` table. Bodies live in a JSONB column and `seq`
//! records insertion order.

use super::{Document, DocumentStore, Sort, StoreError};
use crate::domain::identity::generate_object_id;
use async_trait::async_trait;
use serde_json::{Map as JsonMap, Value as JsonValue};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

#[derive(Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects and makes sure the `documents` table exists.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS documents (
                _id TEXT PRIMARY KEY,
                collection TEXT NOT NULL,
                body JSONB NOT NULL,
                seq BIGSERIAL NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS documents_collection_seq ON documents (collection, seq)",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

fn row_to_document(row: PgRow) -> Result<Document, StoreError> {
    let object_id: String = row.try_get("_id")?;
    let body: JsonValue = row.try_get("body")?;
    match body {
        JsonValue::Object(body) => Ok(Document { object_id, body }),
        _ => Err(StoreError::NotAnObject),
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn find(&self, collection: &str, sort: Sort<'_>) -> Result<Vec<Document>, StoreError> {
        let rows = match sort {
            Sort::InsertionOrder => {
                sqlx::query("SELECT _id, body FROM documents WHERE collection = $1 ORDER BY seq")
                    .bind(collection)
                    .fetch_all(&self.pool)
                    .await?
            }
            Sort::Descending(field) => {
                sqlx::query(
                    "SELECT _id, body FROM documents WHERE collection = $1
                     ORDER BY body->>$2 DESC NULLS LAST, seq",
                )
                .bind(collection)
                .bind(field)
                .fetch_all(&self.pool)
                .await?
            }
        };
        rows.into_iter().map(row_to_document).collect()
    }

    async fn find_one(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, StoreError> {
        let row = sqlx::query(
            "SELECT _id, body FROM documents WHERE collection = $1 AND body->>$2 = $3
             ORDER BY seq LIMIT 1",
        )
        .bind(collection)
        .bind(field)
        .bind(value)
        .fetch_optional(&self.pool)
        .await?;
        row.map(row_to_document).transpose()
    }

    async fn insert(
        &self,
        collection: &str,
        mut body: JsonMap<String, JsonValue>,
    ) -> Result<Document, StoreError> {
        body.remove("_id");
        let object_id = generate_object_id();
        sqlx::query("INSERT INTO documents (_id, collection, body) VALUES ($1, $2, $3)")
            .bind(&object_id)
            .bind(collection)
            .bind(JsonValue::Object(body.clone()))
            .execute(&self.pool)
            .await?;
        Ok(Document { object_id, body })
    }

    async fn delete_by_id(&self, collection: &str, object_id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND _id = $2")
            .bind(collection)
            .bind(object_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
