//! Remote strategy: the four REST resources served by `api_server`.

use crate::app::error::FacadeError;
use crate::app::facade::{Backend, BackendMode, SubscriptionStatus};
use crate::domain::model::{
    Client, ContactSubmission, NewClient, NewContactSubmission, NewProject, NewSubscriber,
    Project, Subscriber,
};
use crate::transport::http::handlers::subscribers::ALREADY_SUBSCRIBED;
use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// `{ "message": ... }` body used by writes without a record to return, and by errors.
#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

pub struct RemoteBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl RemoteBackend {
    pub fn new(base_url: &str) -> Result<Self, FacadeError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, FacadeError> {
        let invalid = |reason: String| FacadeError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_string()));
        }
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Base URL with `segments` appended, each one percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T, FacadeError> {
        let resp = self.client.get(self.endpoint(&[resource])).send().await?;
        Ok(ensure_success(resp).await?.json::<T>().await?)
    }

    async fn post_json<B, T>(&self, resource: &str, body: &B) -> Result<T, FacadeError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .client
            .post(self.endpoint(&[resource]))
            .json(body)
            .send()
            .await?;
        Ok(ensure_success(resp).await?.json::<T>().await?)
    }

    async fn delete(&self, resource: &str, id: &str) -> Result<(), FacadeError> {
        let resp = self
            .client
            .delete(self.endpoint(&[resource, id]))
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }
}

async fn ensure_success(resp: Response) -> Result<Response, FacadeError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = match resp.json::<MessageBody>().await {
        Ok(body) => body.message,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };
    Err(FacadeError::Status { status, message })
}

#[async_trait]
impl Backend for RemoteBackend {
    fn mode(&self) -> BackendMode {
        BackendMode::Remote
    }

    async fn init_mock_data(&self) -> Result<(), FacadeError> {
        Ok(())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, FacadeError> {
        self.get_json("projects").await
    }

    async fn add_project(&self, project: NewProject) -> Result<Project, FacadeError> {
        self.post_json("projects", &project).await
    }

    async fn delete_project(&self, id: &str) -> Result<(), FacadeError> {
        self.delete("projects", id).await
    }

    async fn list_clients(&self) -> Result<Vec<Client>, FacadeError> {
        self.get_json("clients").await
    }

    async fn add_client(&self, client: NewClient) -> Result<Client, FacadeError> {
        self.post_json("clients", &client).await
    }

    async fn delete_client(&self, id: &str) -> Result<(), FacadeError> {
        self.delete("clients", id).await
    }

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, FacadeError> {
        self.get_json("contacts").await
    }

    async fn submit_contact_form(
        &self,
        submission: NewContactSubmission,
    ) -> Result<(), FacadeError> {
        let resp = self
            .client
            .post(self.endpoint(&["contacts"]))
            .json(&submission)
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn list_subscribers(&self) -> Result<Vec<Subscriber>, FacadeError> {
        self.get_json("subscribers").await
    }

    async fn subscribe_newsletter(
        &self,
        email: &str,
    ) -> Result<Option<SubscriptionStatus>, FacadeError> {
        let draft = NewSubscriber {
            email: email.to_string(),
        };
        let reply: MessageBody = self.post_json("subscribers", &draft).await?;
        let status = if reply.message == ALREADY_SUBSCRIBED {
            SubscriptionStatus::AlreadySubscribed
        } else {
            SubscriptionStatus::Subscribed
        };
        Ok(Some(status))
    }
}
