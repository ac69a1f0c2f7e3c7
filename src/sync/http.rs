use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{NetworkError, TaskStore};
use crate::core::task::RemoteTask;

/// JSON client for the todo backend.
///
/// - `GET    {base}/todos/`            list
/// - `POST   {base}/todos/?task=...`   create
/// - `DELETE {base}/todos/{id}`        delete
#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    base_url: String,
    http: Client,
}

impl HttpTaskStore {
    pub fn new(base_url: &str) -> Result<Self, NetworkError> {
        let http = Client::builder()
            .build()
            .map_err(|e| NetworkError::Transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/todos/", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

fn transport(e: reqwest::Error) -> NetworkError {
    NetworkError::Transport(e.to_string())
}

fn check_status(resp: Response) -> Result<Response, NetworkError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(NetworkError::Status(status.as_u16()))
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, NetworkError> {
    let text = check_status(resp)?.text().await.map_err(transport)?;
    serde_json::from_str(&text).map_err(|e| NetworkError::Decode(e.to_string()))
}

impl TaskStore for HttpTaskStore {
    async fn list(&self) -> Result<Vec<RemoteTask>, NetworkError> {
        let resp = self
            .http
            .get(self.collection_url())
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    async fn create(&self, description: &str) -> Result<RemoteTask, NetworkError> {
        let resp = self
            .http
            .post(self.collection_url())
            .query(&[("task", description)])
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    async fn delete(&self, id: i64) -> Result<(), NetworkError> {
        let resp = self
            .http
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(transport)?;
        check_status(resp).map(|_| ())
    }
}
