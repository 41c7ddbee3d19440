// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote service abstraction.
//!
//! The sync engine only ever talks to the remote task service through the
//! [`RemoteClient`] trait, which enables:
//! - A real HTTP client for production
//! - Mock clients for unit testing
//!
//! Methods take `&self` because the per-list task pulls are issued
//! concurrently against a single client.

use std::future::Future;
use std::pin::Pin;

use tm_core::{List, Task, TaskDraft};

/// Error type for remote operations, categorized for the sync engine.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// Transport-level failure (connection refused, timeout, DNS).
    #[error("network error: {0}")]
    Network(String),

    /// Token unavailable, expired, or rejected (401/403-equivalent).
    ///
    /// Aborts the current sync attempt; re-authentication is the caller's
    /// concern.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The addressed resource does not exist (404-equivalent).
    ///
    /// The sync engine treats this as success for delete operations and as
    /// failure for everything else.
    #[error("remote resource not found")]
    NotFound,

    /// Any other non-success remote response.
    #[error("remote api error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Result type for remote operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Client for the remote task service.
///
/// This is a boundary contract: bearer-token handling and transport details
/// live behind it, invisible to the sync engine beyond the [`RemoteError`]
/// categorization.
pub trait RemoteClient: Send + Sync {
    /// Fetch the authoritative set of lists.
    fn list_all_lists(&self)
        -> Pin<Box<dyn Future<Output = RemoteResult<Vec<List>>> + Send + '_>>;

    /// Fetch all tasks of one list.
    fn list_tasks(
        &self,
        list_id: &str,
    ) -> Pin<Box<dyn Future<Output = RemoteResult<Vec<Task>>> + Send + '_>>;

    /// Create a task under a list; the service assigns its identity.
    fn create_task(
        &self,
        list_id: &str,
        draft: TaskDraft,
    ) -> Pin<Box<dyn Future<Output = RemoteResult<Task>> + Send + '_>>;

    /// Delete a task from a list.
    fn delete_task(
        &self,
        list_id: &str,
        task_id: &str,
    ) -> Pin<Box<dyn Future<Output = RemoteResult<()>> + Send + '_>>;

    /// Create a new list; the service assigns its identity.
    fn create_list(
        &self,
        name: &str,
    ) -> Pin<Box<dyn Future<Output = RemoteResult<List>> + Send + '_>>;

    /// Delete a list.
    fn delete_list(
        &self,
        list_id: &str,
    ) -> Pin<Box<dyn Future<Output = RemoteResult<()>> + Send + '_>>;
}
