//! HTTP-backed user directory.
//!
//! Talks to a JSONPlaceholder-style REST API:
//!
//! | call          | request              | body         |
//! |---------------|----------------------|--------------|
//! | `list_users`  | `GET /users`         |              |
//! | `get_user`    | `GET /users/{id}`    |              |
//! | `create_user` | `POST /users`        | draft        |
//! | `update_user` | `PUT /users/{id}`    | full record  |
//! | `delete_user` | `DELETE /users/{id}` |              |

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{DirectoryError, UserDirectory};
use crate::config::DirectoryConfig;
use crate::constants::USER_AGENT;
use crate::models::{User, UserDraft};

/// A [`UserDirectory`] that issues one HTTP request per call.
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    client: Client,
    base_url: String,
}

impl HttpDirectory {
    /// Build a directory client for `base_url`.
    ///
    /// When `timeout` is `None` requests may wait indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, DirectoryError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DirectoryError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a directory client from the `[directory]` config section.
    pub fn from_config(config: &DirectoryConfig) -> Result<Self, DirectoryError> {
        Self::new(&config.base_url, config.timeout_secs.map(Duration::from_secs))
    }

    /// The base URL requests are issued against (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: u64) -> String {
        format!("{}/users/{id}", self.base_url)
    }

    /// Send a request and reject non-2xx responses.
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response, DirectoryError> {
        let resp = request
            .send()
            .await
            .map_err(|e| DirectoryError::Request(e.to_string()))?;

        let status = resp.status();
        tracing::debug!(%url, status = status.as_u16(), "directory responded");

        if !status.is_success() {
            return Err(DirectoryError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, DirectoryError> {
        self.send(request, url)
            .await?
            .json::<T>()
            .await
            .map_err(|e| DirectoryError::Decode(e.to_string()))
    }
}

#[async_trait]
impl UserDirectory for HttpDirectory {
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        let url = self.users_url();
        tracing::debug!(%url, "GET");
        self.send_json(self.client.get(&url), &url).await
    }

    async fn get_user(&self, id: u64) -> Result<User, DirectoryError> {
        let url = self.user_url(id);
        tracing::debug!(%url, "GET");
        self.send_json(self.client.get(&url), &url).await
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<User, DirectoryError> {
        let url = self.users_url();
        tracing::debug!(%url, "POST");
        self.send_json(self.client.post(&url).json(draft), &url).await
    }

    async fn update_user(&self, user: &User) -> Result<User, DirectoryError> {
        let url = self.user_url(user.id);
        tracing::debug!(%url, "PUT");
        self.send_json(self.client.put(&url).json(user), &url).await
    }

    async fn delete_user(&self, id: u64) -> Result<(), DirectoryError> {
        let url = self.user_url(id);
        tracing::debug!(%url, "DELETE");
        self.send(self.client.delete(&url), &url).await?;
        Ok(())
    }
}
