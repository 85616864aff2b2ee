//! The persistence facade.
//!
//! UI-facing code talks to [`Facade`] only. The storage strategy behind it is picked once, at
//! composition time, and applies to every collection at the same time. The facade owns the
//! error policy:
//! - read failures are logged and degrade to an empty list;
//! - write failures propagate to the caller.

use crate::app::error::FacadeError;
use crate::app::local::LocalBackend;
use crate::app::remote::RemoteBackend;
use crate::domain::model::{
    Client, ContactSubmission, NewClient, NewContactSubmission, NewProject, Project, Subscriber,
};
use crate::infra::config;
use crate::storage::kv::{FileKeyValueStore, KeyValueStore};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Which storage strategy backs the facade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendMode {
    /// HTTP resource server backed by a document database.
    Remote,
    /// Persistent key-value store scoped to one profile.
    Local,
}

impl BackendMode {
    /// The mode fixed at build time: `Remote` with the `remote-backend` feature, else `Local`.
    pub const fn compiled() -> Self {
        if cfg!(feature = "remote-backend") {
            BackendMode::Remote
        } else {
            BackendMode::Local
        }
    }
}

/// Outcome reported by a subscription request, when the backend reports one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Subscribed,
    AlreadySubscribed,
}

/// Per-collection list/create/delete capabilities.
///
/// Implementations report every failure. Swallowing is the facade's call, not theirs.
#[async_trait]
pub trait Backend: Send + Sync {
    fn mode(&self) -> BackendMode;

    /// Seeds default content where the strategy keeps its own data.
    async fn init_mock_data(&self) -> Result<(), FacadeError>;

    async fn list_projects(&self) -> Result<Vec<Project>, FacadeError>;
    async fn add_project(&self, project: NewProject) -> Result<Project, FacadeError>;
    async fn delete_project(&self, id: &str) -> Result<(), FacadeError>;

    async fn list_clients(&self) -> Result<Vec<Client>, FacadeError>;
    async fn add_client(&self, client: NewClient) -> Result<Client, FacadeError>;
    async fn delete_client(&self, id: &str) -> Result<(), FacadeError>;

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, FacadeError>;
    async fn submit_contact_form(&self, submission: NewContactSubmission)
        -> Result<(), FacadeError>;

    async fn list_subscribers(&self) -> Result<Vec<Subscriber>, FacadeError>;
    /// Adds `email` unless it is already subscribed. A duplicate is never an error.
    async fn subscribe_newsletter(
        &self,
        email: &str,
    ) -> Result<Option<SubscriptionStatus>, FacadeError>;
}

#[derive(Clone)]
pub struct Facade {
    backend: Arc<dyn Backend>,
}

impl Facade {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    pub fn remote(base_url: &str) -> Result<Self, FacadeError> {
        Ok(Self::new(Arc::new(RemoteBackend::new(base_url)?)))
    }

    pub fn local<S: KeyValueStore + 'static>(store: Arc<S>, delay: Duration) -> Self {
        Self::new(Arc::new(LocalBackend::new(store, delay)))
    }

    /// Builds the facade for [`BackendMode::compiled`] from environment configuration.
    pub fn from_config() -> anyhow::Result<Self> {
        let facade = match BackendMode::compiled() {
            BackendMode::Remote => Self::remote(&config::api_base_url())?,
            BackendMode::Local => Self::local(
                Arc::new(FileKeyValueStore::new(config::local_store_path())),
                config::simulated_delay()?,
            ),
        };
        tracing::info!(mode = ?facade.mode(), "persistence facade ready");
        Ok(facade)
    }

    pub fn mode(&self) -> BackendMode {
        self.backend.mode()
    }

    /// Seeds default projects and clients in local mode. Failures are logged, not returned.
    pub async fn init_mock_data(&self) {
        if let Err(e) = self.backend.init_mock_data().await {
            tracing::error!(error = %e, "error initializing data");
        }
    }

    pub async fn get_projects(&self) -> Vec<Project> {
        degrade(self.backend.list_projects().await, "projects")
    }

    pub async fn add_project(&self, project: NewProject) -> Result<Project, FacadeError> {
        let created = self.backend.add_project(project).await?;
        require_id(&created.id)?;
        Ok(created)
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), FacadeError> {
        self.backend.delete_project(id).await
    }

    pub async fn get_clients(&self) -> Vec<Client> {
        degrade(self.backend.list_clients().await, "clients")
    }

    pub async fn add_client(&self, client: NewClient) -> Result<Client, FacadeError> {
        let created = self.backend.add_client(client).await?;
        require_id(&created.id)?;
        Ok(created)
    }

    pub async fn delete_client(&self, id: &str) -> Result<(), FacadeError> {
        self.backend.delete_client(id).await
    }

    pub async fn get_contact_submissions(&self) -> Vec<ContactSubmission> {
        degrade(self.backend.list_contact_submissions().await, "contacts")
    }

    pub async fn submit_contact_form(
        &self,
        submission: NewContactSubmission,
    ) -> Result<(), FacadeError> {
        self.backend.submit_contact_form(submission).await
    }

    pub async fn get_subscribers(&self) -> Vec<Subscriber> {
        degrade(self.backend.list_subscribers().await, "subscribers")
    }

    /// `Some(..)` in remote mode, where the server says whether the email was new.
    /// `None` in local mode, where a duplicate is dropped silently.
    pub async fn subscribe_newsletter(
        &self,
        email: &str,
    ) -> Result<Option<SubscriptionStatus>, FacadeError> {
        self.backend.subscribe_newsletter(email).await
    }
}

fn degrade<T>(result: Result<Vec<T>, FacadeError>, collection: &'static str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(collection, error = %e, "read failed, returning empty list");
        Vec::new()
    })
}

fn require_id(id: &str) -> Result<(), FacadeError> {
    if id.is_empty() {
        return Err(FacadeError::MissingId);
    }
    Ok(())
}
