// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP implementation of the remote client.
//!
//! Speaks the remote task API:
//! - `GET    {base}/lists`                     -> `{"value": [List, ...]}`
//! - `POST   {base}/lists`                     body `{"displayName": name}`
//! - `DELETE {base}/lists/{id}`                -> 204
//! - `GET    {base}/lists/{id}/tasks?$top=100` -> `{"value": [Task, ...]}`
//! - `POST   {base}/lists/{id}/tasks`          body TaskDraft
//! - `DELETE {base}/lists/{id}/tasks/{tid}`    -> 204
//!
//! Authentication is a bearer token supplied by an injectable [`TokenSource`];
//! acquiring and refreshing the token stays outside this crate.

use std::future::Future;
use std::pin::Pin;

use serde::Deserialize;
use tm_core::{List, Task, TaskDraft};

use super::remote::{RemoteClient, RemoteError, RemoteResult};

/// Page size requested per task-list fetch.
const PAGE_SIZE: u32 = 100;

/// Source of bearer tokens for remote requests.
///
/// Called once per request, so a rotating token is picked up without any
/// coordination with the sync engine.
pub trait TokenSource: Send + Sync {
    /// Returns a currently valid bearer token.
    fn bearer_token(&self) -> RemoteResult<String>;
}

/// Token source reading a fixed environment variable.
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    /// Creates a token source reading the given environment variable.
    pub fn new(var: impl Into<String>) -> Self {
        EnvToken { var: var.into() }
    }
}

impl TokenSource for EnvToken {
    fn bearer_token(&self) -> RemoteResult<String> {
        std::env::var(&self.var)
            .map_err(|_| RemoteError::Auth(format!("environment variable {} not set", self.var)))
    }
}

/// Token source holding a fixed token (for tests and short-lived scripts).
pub struct StaticToken(pub String);

impl TokenSource for StaticToken {
    fn bearer_token(&self) -> RemoteResult<String> {
        Ok(self.0.clone())
    }
}

/// Collection envelope used by the remote API.
#[derive(Debug, Deserialize)]
pub(super) struct Collection<T> {
    pub(super) value: Vec<T>,
}

/// Map a non-success HTTP status to a [`RemoteError`].
pub(super) fn categorize(status: u16, message: String) -> RemoteError {
    match status {
        401 | 403 => RemoteError::Auth(message),
        404 => RemoteError::NotFound,
        _ => RemoteError::Api { status, message },
    }
}

/// Strip trailing slashes so endpoint paths can always start with `/`.
pub(super) fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// HTTP remote client backed by reqwest.
pub struct HttpRemote {
    http: reqwest::Client,
    base_url: String,
    token: Box<dyn TokenSource>,
}

impl HttpRemote {
    /// Creates an HTTP remote against the given base URL.
    pub fn new(base_url: &str, token: Box<dyn TokenSource>) -> Self {
        HttpRemote {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(base_url),
            token,
        }
    }

    /// Issue a request and map transport or status failures to [`RemoteError`].
    async fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> RemoteResult<reqwest::Response> {
        let token = self.token.bearer_token()?;
        let url = format!("{}{}", self.base_url, path);

        let mut req = self.http.request(method, &url).bearer_auth(token);
        if let Some(body) = body {
            req = req.json(&body);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            let message = resp.text().await.unwrap_or_default();
            Err(categorize(status.as_u16(), message))
        }
    }

    /// Issue a GET and decode the `{"value": [...]}` envelope.
    async fn get_collection<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> RemoteResult<Vec<T>> {
        let resp = self.request(reqwest::Method::GET, path, None).await?;
        let status = resp.status().as_u16();
        let collection: Collection<T> = resp
            .json()
            .await
            .map_err(|e| categorize(status, format!("invalid response body: {e}")))?;
        Ok(collection.value)
    }

    /// Issue a POST and decode the created entity.
    async fn post_entity<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> RemoteResult<T> {
        let resp = self.request(reqwest::Method::POST, path, Some(body)).await?;
        let status = resp.status().as_u16();
        resp.json()
            .await
            .map_err(|e| categorize(status, format!("invalid response body: {e}")))
    }
}

impl RemoteClient for HttpRemote {
    fn list_all_lists(
        &self,
    ) -> Pin<Box<dyn Future<Output = RemoteResult<Vec<List>>> + Send + '_>> {
        Box::pin(async move { self.get_collection("/lists").await })
    }

    fn list_tasks(
        &self,
        list_id: &str,
    ) -> Pin<Box<dyn Future<Output = RemoteResult<Vec<Task>>> + Send + '_>> {
        let list_id = list_id.to_string();
        Box::pin(async move {
            let path = format!("/lists/{list_id}/tasks?$top={PAGE_SIZE}");
            let mut tasks: Vec<Task> = self.get_collection(&path).await?;
            // The wire shape omits the owning list; stamp it here
            for task in &mut tasks {
                task.list_id = list_id.clone();
            }
            Ok(tasks)
        })
    }

    fn create_task(
        &self,
        list_id: &str,
        draft: TaskDraft,
    ) -> Pin<Box<dyn Future<Output = RemoteResult<Task>> + Send + '_>> {
        let list_id = list_id.to_string();
        Box::pin(async move {
            let path = format!("/lists/{list_id}/tasks");
            let body = serde_json::to_value(&draft)
                .map_err(|e| RemoteError::Api {
                    status: 0,
                    message: format!("could not encode task draft: {e}"),
                })?;
            let mut task: Task = self.post_entity(&path, body).await?;
            task.list_id = list_id;
            Ok(task)
        })
    }

    fn delete_task(
        &self,
        list_id: &str,
        task_id: &str,
    ) -> Pin<Box<dyn Future<Output = RemoteResult<()>> + Send + '_>> {
        let path = format!("/lists/{list_id}/tasks/{task_id}");
        Box::pin(async move {
            self.request(reqwest::Method::DELETE, &path, None).await?;
            Ok(())
        })
    }

    fn create_list(
        &self,
        name: &str,
    ) -> Pin<Box<dyn Future<Output = RemoteResult<List>> + Send + '_>> {
        let body = serde_json::json!({ "displayName": name });
        Box::pin(async move { self.post_entity("/lists", body).await })
    }

    fn delete_list(
        &self,
        list_id: &str,
    ) -> Pin<Box<dyn Future<Output = RemoteResult<()>> + Send + '_>> {
        let path = format!("/lists/{list_id}");
        Box::pin(async move {
            self.request(reqwest::Method::DELETE, &path, None).await?;
            Ok(())
        })
    }
}
