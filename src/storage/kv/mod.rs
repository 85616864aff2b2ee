//! Browser-style persistent key-value storage.
//!
//! Local mode treats one of these stores as its whole database: one string key per
//! collection, each holding a JSON-encoded array of records.

use async_trait::async_trait;

pub mod file;
pub mod memory;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;

pub const PROJECTS_KEY: &str = "realtrust_projects";
pub const CLIENTS_KEY: &str = "realtrust_clients";
pub const CONTACTS_KEY: &str = "realtrust_contacts";
pub const SUBSCRIBERS_KEY: &str = "realtrust_subscribers";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// String-keyed, string-valued persistent storage.
///
/// Each call is atomic on its own. Sequences of calls are not, so a get followed by a set
/// can interleave with another caller's get/set pair.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
