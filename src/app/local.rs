//! Local strategy: every collection lives in a [`KeyValueStore`].
//!
//! Each operation sleeps for the configured delay, then does a plain read-modify-write of the
//! collection's key. Nothing holds a lock across that sequence, so two overlapping writers on
//! the same key can lose one write (the later snapshot wins).

use crate::app::error::FacadeError;
use crate::app::facade::{Backend, BackendMode, SubscriptionStatus};
use crate::domain::identity::{generate_id, now_timestamp};
use crate::domain::model::{
    Client, ContactSubmission, Identified, Keyed, NewClient, NewContactSubmission, NewProject,
    NewSubscriber, Project, Subscriber, Timestamped,
};
use crate::domain::seed;
use crate::storage::kv::{KeyValueStore, CLIENTS_KEY, CONTACTS_KEY, PROJECTS_KEY, SUBSCRIBERS_KEY};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

pub struct LocalBackend<S> {
    store: Arc<S>,
    delay: Duration,
}

impl<S: KeyValueStore> LocalBackend<S> {
    pub fn new(store: Arc<S>, delay: Duration) -> Self {
        Self { store, delay }
    }

    async fn simulate_delay(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    /// Decodes the collection under `key`. Absent or empty means an empty collection.
    async fn read<T: DeserializeOwned>(&self, key: &'static str) -> Result<Vec<T>, FacadeError> {
        match self.store.get_item(key).await? {
            Some(raw) if !raw.is_empty() => {
                serde_json::from_str(&raw).map_err(|source| FacadeError::Decode { key, source })
            }
            _ => Ok(Vec::new()),
        }
    }

    async fn write<T: Serialize>(
        &self,
        key: &'static str,
        records: &[T],
    ) -> Result<(), FacadeError> {
        let raw = serde_json::to_string(records)?;
        self.store.set_item(key, &raw).await?;
        Ok(())
    }

    async fn list<T: DeserializeOwned>(&self, key: &'static str) -> Result<Vec<T>, FacadeError> {
        self.simulate_delay().await;
        self.read(key).await
    }

    async fn append<T>(&self, key: &'static str, record: T) -> Result<T, FacadeError>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        self.simulate_delay().await;
        let mut records: Vec<T> = self.read(key).await?;
        records.push(record.clone());
        self.write(key, &records).await?;
        Ok(record)
    }

    /// Filters out the record with `id`. A missing id leaves the collection as it was.
    async fn remove<T>(&self, key: &'static str, id: &str) -> Result<(), FacadeError>
    where
        T: Serialize + DeserializeOwned + Identified,
    {
        self.simulate_delay().await;
        let mut records: Vec<T> = self.read(key).await?;
        records.retain(|r| r.id() != id);
        self.write(key, &records).await
    }

    async fn seed_if_absent<T: Serialize>(
        &self,
        key: &'static str,
        defaults: Vec<T>,
    ) -> Result<(), FacadeError> {
        let existing = self.store.get_item(key).await?;
        if existing.map_or(true, |raw| raw.is_empty()) {
            tracing::debug!(key, count = defaults.len(), "seeding default records");
            self.write(key, &defaults).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl<S: KeyValueStore + 'static> Backend for LocalBackend<S> {
    fn mode(&self) -> BackendMode {
        BackendMode::Local
    }

    async fn init_mock_data(&self) -> Result<(), FacadeError> {
        self.seed_if_absent(PROJECTS_KEY, seed::default_projects()).await?;
        self.seed_if_absent(CLIENTS_KEY, seed::default_clients()).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>, FacadeError> {
        self.list(PROJECTS_KEY).await
    }

    async fn add_project(&self, project: NewProject) -> Result<Project, FacadeError> {
        self.append(PROJECTS_KEY, project.with_id(generate_id())).await
    }

    async fn delete_project(&self, id: &str) -> Result<(), FacadeError> {
        self.remove::<Project>(PROJECTS_KEY, id).await
    }

    async fn list_clients(&self) -> Result<Vec<Client>, FacadeError> {
        self.list(CLIENTS_KEY).await
    }

    async fn add_client(&self, client: NewClient) -> Result<Client, FacadeError> {
        self.append(CLIENTS_KEY, client.with_id(generate_id())).await
    }

    async fn delete_client(&self, id: &str) -> Result<(), FacadeError> {
        self.remove::<Client>(CLIENTS_KEY, id).await
    }

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, FacadeError> {
        self.list(CONTACTS_KEY).await
    }

    async fn submit_contact_form(
        &self,
        submission: NewContactSubmission,
    ) -> Result<(), FacadeError> {
        let record = submission.with_id_and_date(generate_id(), now_timestamp());
        self.append(CONTACTS_KEY, record).await?;
        Ok(())
    }

    async fn list_subscribers(&self) -> Result<Vec<Subscriber>, FacadeError> {
        self.list(SUBSCRIBERS_KEY).await
    }

    async fn subscribe_newsletter(
        &self,
        email: &str,
    ) -> Result<Option<SubscriptionStatus>, FacadeError> {
        self.simulate_delay().await;
        let mut subscribers: Vec<Subscriber> = self.read(SUBSCRIBERS_KEY).await?;
        if subscribers.iter().any(|s| s.email == email) {
            return Ok(None);
        }
        let draft = NewSubscriber {
            email: email.to_string(),
        };
        subscribers.push(draft.with_id_and_date(generate_id(), now_timestamp()));
        self.write(SUBSCRIBERS_KEY, &subscribers).await?;
        Ok(None)
    }
}
