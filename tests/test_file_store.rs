//! File-backed key-value store: the on-disk stand-in for one browser profile.

use realtrust::storage::kv::{FileKeyValueStore, KeyValueStore, StorageError, PROJECTS_KEY};
use realtrust::{Facade, NewProject};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn missing_file_reads_as_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let store = FileKeyValueStore::new(dir.path().join("profile.json"));

    assert_eq!(store.get_item("anything").await?, None);
    store.remove_item("anything").await?;
    assert!(!store.path().exists());
    Ok(())
}

#[tokio::test]
async fn values_survive_a_new_store_instance() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("profile.json");

    let store = FileKeyValueStore::new(&path);
    store.set_item("a", "1").await?;
    store.set_item("b", "[\"two\"]").await?;
    store.set_item("a", "3").await?;

    let reopened = FileKeyValueStore::new(&path);
    assert_eq!(reopened.get_item("a").await?.as_deref(), Some("3"));
    assert_eq!(reopened.get_item("b").await?.as_deref(), Some("[\"two\"]"));

    reopened.remove_item("a").await?;
    assert_eq!(store.get_item("a").await?, None);
    assert_eq!(store.get_item("b").await?.as_deref(), Some("[\"two\"]"));
    Ok(())
}

#[tokio::test]
async fn corrupt_file_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("profile.json");
    std::fs::write(&path, b"not a json object")?;

    let store = FileKeyValueStore::new(&path);
    let err = store.get_item("a").await.unwrap_err();
    assert!(matches!(err, StorageError::Corrupt(_)));
    Ok(())
}

#[tokio::test]
async fn local_facade_persists_across_restarts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("profile.json");

    let facade = Facade::local(Arc::new(FileKeyValueStore::new(&path)), Duration::ZERO);
    let created = facade
        .add_project(NewProject {
            name: "Harbor Lofts".to_string(),
            description: "Waterfront conversion".to_string(),
            image_url: "https://example.com/lofts.jpg".to_string(),
        })
        .await?;

    let reopened = Facade::local(Arc::new(FileKeyValueStore::new(&path)), Duration::ZERO);
    assert_eq!(reopened.get_projects().await, vec![created]);

    let raw: serde_json::Value = serde_json::from_slice(&std::fs::read(&path)?)?;
    assert!(raw.get(PROJECTS_KEY).and_then(|v| v.as_str()).is_some());
    Ok(())
}

#[tokio::test]
async fn unreadable_store_degrades_reads_to_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("profile.json");
    std::fs::write(&path, b"{")?;

    let facade = Facade::local(Arc::new(FileKeyValueStore::new(&path)), Duration::ZERO);
    assert!(facade.get_projects().await.is_empty());
    assert!(facade.subscribe_newsletter("a@b.com").await.is_err());
    Ok(())
}
