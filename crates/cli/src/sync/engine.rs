// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sync orchestration between the local mirror and the remote service.
//!
//! A sync attempt runs three phases:
//! 1. Drain: replay queued actions against the remote, strictly in id order,
//!    halting at the first failure.
//! 2. Pull: fetch the authoritative lists and overwrite the local set.
//! 3. Per-list refresh: fetch every list's tasks concurrently and overwrite
//!    each mirrored set.
//!
//! Failures are logged and collapsed into [`SyncStatus::Failed`]; the durable
//! queue is the source of truth for what remains pending, so retry is simply
//! calling [`SyncEngine::sync`] again later.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use futures_util::future;
use tm_core::{ActionPayload, Store};

use super::remote::{RemoteClient, RemoteError};

/// Error type for a sync attempt, internal to the engine phases.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Local persistence failure.
    #[error("storage error: {0}")]
    Storage(#[from] tm_core::Error),

    /// Remote call failure.
    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),
}

/// Result type for engine operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Outcome of a sync attempt, as reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    /// Queue drained and mirror refreshed.
    Completed,
    /// Another sync was already in flight; nothing was touched.
    Skipped,
    /// The attempt failed; pending actions remain queued for the next run.
    Failed,
}

/// Releases the single-flight guard on every exit path.
struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// The sync orchestrator.
///
/// Owns the durable store, the remote client, and the single-flight guard.
/// The guard is per-instance, never global, so separate engines (tests,
/// multiple windows) cannot share hidden state.
pub struct SyncEngine<R: RemoteClient> {
    store: Mutex<Store>,
    remote: R,
    syncing: AtomicBool,
}

impl<R: RemoteClient> SyncEngine<R> {
    /// Creates an engine around a store and a remote client.
    pub fn new(store: Store, remote: R) -> Self {
        SyncEngine {
            store: Mutex::new(store),
            remote,
            syncing: AtomicBool::new(false),
        }
    }

    /// Locked access to the underlying store.
    ///
    /// A poisoned lock is recovered: the store's own transactions keep it
    /// consistent even if a holder panicked.
    pub fn store(&self) -> MutexGuard<'_, Store> {
        match self.store.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// The remote client this engine drives.
    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// True while a sync attempt is in flight.
    pub fn is_syncing(&self) -> bool {
        self.syncing.load(Ordering::SeqCst)
    }

    /// Append a pending action to the durable queue.
    ///
    /// This is the only sanctioned mutation path: a local edit with no
    /// queued action would be silently discarded by the next snapshot pull.
    pub fn enqueue(&self, payload: ActionPayload) -> SyncResult<i64> {
        let id = self.store().enqueue_action(&payload)?;
        tracing::debug!(action_id = id, kind = payload.kind(), "action queued");
        Ok(id)
    }

    /// Run one sync attempt.
    ///
    /// Single-flight: if an attempt is already running, returns
    /// [`SyncStatus::Skipped`] immediately without touching the store or the
    /// remote. Errors are logged and reported as [`SyncStatus::Failed`];
    /// whatever the drain did not apply stays queued.
    pub async fn sync(&self) -> SyncStatus {
        if self
            .syncing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("sync already in progress, skipping");
            return SyncStatus::Skipped;
        }
        let _guard = FlightGuard(&self.syncing);

        tracing::info!("starting sync");
        match self.run_sync().await {
            Ok(()) => {
                tracing::info!("sync completed");
                SyncStatus::Completed
            }
            Err(e) => {
                tracing::warn!("sync failed: {e}");
                SyncStatus::Failed
            }
        }
    }

    /// The sync protocol: drain, pull, per-list refresh.
    async fn run_sync(&self) -> SyncResult<()> {
        self.drain_queue().await?;

        let lists = self.remote.list_all_lists().await?;
        self.store().replace_all_lists(&lists)?;

        // Per-list fetches have no ordering dependency; issue them
        // concurrently. Writes happen after each fetch settles.
        let fetches = lists.iter().map(|list| async move {
            (list.id.clone(), self.remote.list_tasks(&list.id).await)
        });
        let results = future::join_all(fetches).await;

        let mut first_err: Option<RemoteError> = None;
        for (list_id, result) in results {
            match result {
                Ok(tasks) => self.store().replace_tasks_for_list(&list_id, &tasks)?,
                Err(e) => {
                    tracing::warn!(list_id = %list_id, "task refresh failed: {e}");
                    if first_err.is_none() {
                        first_err = Some(e);
                    }
                }
            }
        }

        // Any failed list fails the attempt, even though the others were
        // already written.
        match first_err {
            None => Ok(()),
            Some(e) => Err(e.into()),
        }
    }

    /// Replay queued actions in ascending id order, halting on first failure.
    ///
    /// Never skip-and-continue: later actions may depend on earlier ones
    /// (a list must exist before a task can move into it), so the failing
    /// action and its whole suffix stay queued for the next attempt.
    async fn drain_queue(&self) -> SyncResult<()> {
        let actions = self.store().list_queued_actions()?;
        if actions.is_empty() {
            return Ok(());
        }

        tracing::debug!("draining {} queued actions", actions.len());
        for action in actions {
            if let Err(e) = self.apply_action(&action.payload).await {
                tracing::warn!(
                    action_id = action.id,
                    kind = action.payload.kind(),
                    "action failed, halting drain: {e}"
                );
                return Err(e.into());
            }
            self.store().dequeue_action(action.id)?;
            tracing::debug!(action_id = action.id, kind = action.payload.kind(), "action applied");
        }
        Ok(())
    }

    /// Replay one action against the remote.
    async fn apply_action(&self, payload: &ActionPayload) -> Result<(), RemoteError> {
        match payload {
            ActionPayload::MoveTask {
                source_list_id,
                destination_list_id,
                task_to_move,
            } => {
                self.remote
                    .create_task(destination_list_id, task_to_move.to_draft())
                    .await?;
                absorb_not_found(
                    self.remote
                        .delete_task(source_list_id, &task_to_move.id)
                        .await,
                )
            }
            ActionPayload::CreateList { list_name } => {
                // The created list's identity arrives with the next pull
                self.remote.create_list(list_name).await?;
                Ok(())
            }
            ActionPayload::DeleteList { list_id } => {
                absorb_not_found(self.remote.delete_list(list_id).await)
            }
        }
    }
}

/// Treat not-found as success for deletes.
///
/// A previous attempt may have completed the remote delete but crashed before
/// dequeuing; the retry then reissues a delete for an id that is already gone.
fn absorb_not_found(result: Result<(), RemoteError>) -> Result<(), RemoteError> {
    match result {
        Err(RemoteError::NotFound) => Ok(()),
        other => other,
    }
}
