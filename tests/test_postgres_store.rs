//! Document store over PostgreSQL.
//!
//! Needs `DATABASE_URL` (read from the environment or `.env`). Without it these tests return
//! early. Each run writes to fresh collection names so reruns against the same database do
//! not see each other's rows.

mod common;

use realtrust::domain::identity::generate_id;
use realtrust::storage::document::{Document, DocumentStore, PostgresDocumentStore, Sort};
use realtrust::{Facade, NewContactSubmission, SubscriptionStatus};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

async fn connect() -> Result<Option<PostgresDocumentStore>, Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        println!("DATABASE_URL not set, skipping Postgres document store test");
        return Ok(None);
    };
    Ok(Some(PostgresDocumentStore::connect(&database_url).await?))
}

fn emails(docs: Vec<Document>) -> Vec<String> {
    docs.into_iter()
        .map(|d| d.field_str("email").unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn postgres_store_orders_and_filters() -> Result<(), Box<dyn std::error::Error>> {
    let Some(store) = connect().await? else {
        return Ok(());
    };
    // Connecting twice re-runs the idempotent schema setup.
    store.ensure_schema().await?;
    store.ping().await?;

    let collection = format!("subscribers_{}", generate_id());
    for (email, date) in [
        ("b@x.io", "2024-01-02T00:00:00.000Z"),
        ("a@x.io", "2024-01-03T00:00:00.000Z"),
        ("c@x.io", "2024-01-01T00:00:00.000Z"),
        ("d@x.io", "2024-01-02T00:00:00.000Z"),
    ] {
        let body = json!({ "email": email, "date": date, "_id": "ignored" });
        let doc = store
            .insert(&collection, body.as_object().cloned().unwrap_or_default())
            .await?;
        assert_eq!(doc.object_id.len(), 24);
        assert!(doc.body.get("_id").is_none());
    }

    let inserted = emails(store.find(&collection, Sort::InsertionOrder).await?);
    assert_eq!(inserted, vec!["b@x.io", "a@x.io", "c@x.io", "d@x.io"]);

    // Equal dates keep insertion order.
    let newest_first = emails(store.find(&collection, Sort::Descending("date")).await?);
    assert_eq!(newest_first, vec!["a@x.io", "b@x.io", "d@x.io", "c@x.io"]);

    let found = store
        .find_one(&collection, "email", "c@x.io")
        .await?
        .expect("c@x.io is stored");
    assert_eq!(found.field_str("date"), Some("2024-01-01T00:00:00.000Z"));
    assert!(store.delete_by_id(&collection, &found.object_id).await?);
    assert!(!store.delete_by_id(&collection, &found.object_id).await?);
    assert!(!store.delete_by_id(&collection, "not-an-object-id").await?);
    assert!(store.find_one(&collection, "email", "c@x.io").await?.is_none());

    let untouched = format!("projects_{}", generate_id());
    assert!(store.find(&untouched, Sort::InsertionOrder).await?.is_empty());

    sqlx::query("DELETE FROM documents WHERE collection = $1")
        .bind(&collection)
        .execute(store.pool())
        .await?;
    Ok(())
}

#[tokio::test]
async fn server_over_postgres_dedups_and_sorts() -> Result<(), Box<dyn std::error::Error>> {
    let Some(store) = connect().await? else {
        return Ok(());
    };
    sqlx::query("DELETE FROM documents WHERE collection IN ('contacts', 'subscribers')")
        .execute(store.pool())
        .await?;

    let (origin, server) = common::spawn_server(Arc::new(store)).await?;
    let facade = Facade::remote(&format!("{}/api", origin))?;

    let email = format!("{}@example.com", generate_id());
    assert_eq!(
        facade.subscribe_newsletter(&email).await?,
        Some(SubscriptionStatus::Subscribed)
    );
    assert_eq!(
        facade.subscribe_newsletter(&email).await?,
        Some(SubscriptionStatus::AlreadySubscribed)
    );
    let subscribers = facade.get_subscribers().await;
    assert_eq!(subscribers.iter().filter(|s| s.email == email).count(), 1);

    for name in ["Older", "Newer"] {
        facade
            .submit_contact_form(NewContactSubmission {
                full_name: name.to_string(),
                email: email.clone(),
                mobile: "5550100".to_string(),
                city: "Austin".to_string(),
            })
            .await?;
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    let contacts = facade.get_contact_submissions().await;
    let names: Vec<&str> = contacts.iter().map(|c| c.full_name.as_str()).collect();
    assert_eq!(names, vec!["Newer", "Older"]);

    server.abort();
    Ok(())
}
