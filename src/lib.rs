pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{
    Backend, BackendMode, Facade, FacadeError, LocalBackend, RemoteBackend, SubscriptionStatus,
};
pub use domain::model::{
    Client, ContactSubmission, NewClient, NewContactSubmission, NewProject, NewSubscriber,
    Project, Subscriber,
};
pub use storage::document::{DocumentStore, MemoryDocumentStore, PostgresDocumentStore};
pub use storage::kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
