use realtrust::domain::identity::{generate_id, generate_object_id, now_timestamp, LOCAL_ID_LEN};
use realtrust::domain::media::{file_to_data_uri, guess_image_mime, is_data_uri, to_data_uri};
use realtrust::storage::document::{MemoryDocumentStore, Sort};
use realtrust::DocumentStore;
use serde_json::json;
use std::collections::HashSet;
use std::path::Path;

#[test]
fn local_ids_are_short_base36() {
    let ids: HashSet<String> = (0..500).map(|_| generate_id()).collect();
    assert_eq!(ids.len(), 500);
    for id in &ids {
        assert_eq!(id.len(), LOCAL_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}

#[test]
fn object_ids_lead_with_the_current_second() {
    let id = generate_object_id();
    assert_eq!(id.len(), 24);
    let secs = u32::from_str_radix(&id[..8], 16).unwrap();
    let now = chrono::Utc::now().timestamp() as u32;
    assert!(now.abs_diff(secs) <= 2);
}

#[test]
fn timestamps_are_millisecond_utc() {
    let ts = now_timestamp();
    assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    // e.g. 2024-05-01T12:34:56.789Z
    assert_eq!(ts.len(), 24);
    assert!(ts.ends_with('Z'));
}

#[test]
fn data_uris() {
    assert_eq!(to_data_uri("image/png", b"hi"), "data:image/png;base64,aGk=");
    assert!(is_data_uri("data:image/png;base64,aGk="));
    assert!(!is_data_uri("https://images.unsplash.com/photo.jpg"));
    assert_eq!(guess_image_mime(Path::new("a/B.JPG")), "image/jpeg");
    assert_eq!(guess_image_mime(Path::new("logo.svg")), "image/svg+xml");
    assert_eq!(guess_image_mime(Path::new("README")), "application/octet-stream");
}

#[tokio::test]
async fn file_to_data_uri_reads_and_encodes() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("pixel.gif");
    std::fs::write(&path, b"GIF89a")?;
    assert_eq!(file_to_data_uri(&path).await?, "data:image/gif;base64,R0lGODlh");
    Ok(())
}

#[tokio::test]
async fn memory_document_store_orders_and_filters() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryDocumentStore::new();
    for (email, date) in [
        ("b@x.io", "2024-01-02T00:00:00.000Z"),
        ("a@x.io", "2024-01-03T00:00:00.000Z"),
        ("c@x.io", "2024-01-01T00:00:00.000Z"),
    ] {
        let body = json!({ "email": email, "date": date });
        store
            .insert("subscribers", body.as_object().cloned().unwrap_or_default())
            .await?;
    }

    let inserted: Vec<_> = store
        .find("subscribers", Sort::InsertionOrder)
        .await?
        .into_iter()
        .map(|d| d.field_str("email").unwrap_or_default().to_string())
        .collect();
    assert_eq!(inserted, vec!["b@x.io", "a@x.io", "c@x.io"]);

    let newest_first: Vec<_> = store
        .find("subscribers", Sort::Descending("date"))
        .await?
        .into_iter()
        .map(|d| d.field_str("email").unwrap_or_default().to_string())
        .collect();
    assert_eq!(newest_first, vec!["a@x.io", "b@x.io", "c@x.io"]);

    let found = store.find_one("subscribers", "email", "c@x.io").await?;
    let found = found.expect("c@x.io is stored");
    assert!(store.delete_by_id("subscribers", &found.object_id).await?);
    assert!(!store.delete_by_id("subscribers", &found.object_id).await?);
    assert!(store.find_one("subscribers", "email", "c@x.io").await?.is_none());
    assert!(store.find("projects", Sort::InsertionOrder).await?.is_empty());
    Ok(())
}
