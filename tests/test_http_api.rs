//! Wire-level checks against the resource server.

mod common;

use realtrust::MemoryDocumentStore;
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;

#[tokio::test]
async fn records_expose_id_not_native_identity() -> Result<(), Box<dyn std::error::Error>> {
    let (origin, _server) = common::spawn_server(Arc::new(MemoryDocumentStore::new())).await?;
    let client = reqwest::Client::new();

    let created: JsonValue = client
        .post(format!("{}/api/clients", origin))
        .json(&json!({
            "name": "Shipra Kayak",
            "designation": "Brand Designer",
            "description": "Amazing experience!",
            "imageUrl": "https://example.com/s.jpg",
            "_id": "caller-supplied",
            "id": "also-ignored",
            "extra": "dropped"
        }))
        .send()
        .await?
        .json()
        .await?;
    assert!(created.get("_id").is_none());
    assert!(created.get("extra").is_none());
    let id = created["id"].as_str().unwrap_or_default().to_string();
    assert_eq!(id.len(), 24);
    assert_ne!(id, "also-ignored");

    let listed: JsonValue = client
        .get(format!("{}/api/clients", origin))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed, json!([created]));
    Ok(())
}

#[tokio::test]
async fn write_acknowledgements() -> Result<(), Box<dyn std::error::Error>> {
    let (origin, _server) = common::spawn_server(Arc::new(MemoryDocumentStore::new())).await?;
    let client = reqwest::Client::new();

    let saved: JsonValue = client
        .post(format!("{}/api/contacts", origin))
        .json(&json!({
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "mobile": "5550100",
            "city": "Austin",
            "date": "1999-01-01T00:00:00.000Z"
        }))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(saved, json!({ "message": "Contact saved" }));

    let contacts: JsonValue = client
        .get(format!("{}/api/contacts", origin))
        .send()
        .await?
        .json()
        .await?;
    let date = contacts[0]["date"].as_str().unwrap_or_default();
    assert!(date > "2000", "caller-supplied date must be ignored, got {}", date);

    let first: JsonValue = client
        .post(format!("{}/api/subscribers", origin))
        .json(&json!({ "email": "a@b.com" }))
        .send()
        .await?
        .json()
        .await?;
    let second: JsonValue = client
        .post(format!("{}/api/subscribers", origin))
        .json(&json!({ "email": "a@b.com" }))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(first, json!({ "message": "Subscribed successfully" }));
    assert_eq!(second, json!({ "message": "Already subscribed" }));

    let deleted = client
        .delete(format!("{}/api/projects/unknown", origin))
        .send()
        .await?;
    assert_eq!(deleted.status().as_u16(), 200);
    assert_eq!(
        deleted.json::<JsonValue>().await?,
        json!({ "message": "Project deleted" })
    );
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_rejected_with_a_message() -> Result<(), Box<dyn std::error::Error>> {
    let (origin, _server) = common::spawn_server(Arc::new(MemoryDocumentStore::new())).await?;
    let resp = reqwest::Client::new()
        .post(format!("{}/api/projects", origin))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await?;
    assert!(resp.status().is_client_error());
    let body: JsonValue = resp.json().await?;
    assert!(body["message"]
        .as_str()
        .unwrap_or_default()
        .starts_with("Invalid JSON body"));
    Ok(())
}

#[tokio::test]
async fn large_inline_images_are_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let (origin, _server) = common::spawn_server(Arc::new(MemoryDocumentStore::new())).await?;
    let image = realtrust::domain::media::to_data_uri("image/png", &vec![7u8; 4 * 1024 * 1024]);

    let resp = reqwest::Client::new()
        .post(format!("{}/api/projects", origin))
        .json(&json!({ "name": "Big", "description": "", "imageUrl": image }))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 200);
    let created: JsonValue = resp.json().await?;
    assert_eq!(created["imageUrl"].as_str().map(str::len), Some(image.len()));
    Ok(())
}

#[tokio::test]
async fn health_reports_ok() -> Result<(), Box<dyn std::error::Error>> {
    let (origin, _server) = common::spawn_server(Arc::new(MemoryDocumentStore::new())).await?;
    let resp = reqwest::get(format!("{}/health", origin)).await?;
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.json::<JsonValue>().await?, json!({ "status": "ok" }));
    Ok(())
}
