// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pending mutations queued for the next sync.
//!
//! Every user-visible mutation made while offline is recorded as an
//! [`ActionPayload`] and appended to the durable queue. The sync engine
//! drains the queue strictly in insertion order, because later actions may
//! depend on earlier ones (a list must exist before a task can be moved
//! into it).
//!
//! Payloads are a tagged union: each action type carries only the fields it
//! needs. New action types stay backward-compatible by type tag.

use serde::{Deserialize, Serialize};

use crate::model::Task;

/// A queued, not-yet-applied user mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedAction {
    /// Store-assigned identifier; strictly increasing, never reused.
    ///
    /// Insertion order is the drain order.
    pub id: i64,
    /// The mutation to replay against the remote service.
    pub payload: ActionPayload,
}

/// The mutation a queued action performs against the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ActionPayload {
    /// Move a task between lists: create a copy under the destination, then
    /// delete the original from the source.
    MoveTask {
        source_list_id: String,
        destination_list_id: String,
        /// Snapshot of the task at enqueue time; its draft fields are used
        /// for the remote create.
        task_to_move: Task,
    },

    /// Create a new list remotely.
    CreateList { list_name: String },

    /// Delete a list remotely.
    DeleteList { list_id: String },
}

impl ActionPayload {
    /// Creates a MoveTask payload.
    pub fn move_task(
        source_list_id: impl Into<String>,
        destination_list_id: impl Into<String>,
        task_to_move: Task,
    ) -> Self {
        ActionPayload::MoveTask {
            source_list_id: source_list_id.into(),
            destination_list_id: destination_list_id.into(),
            task_to_move,
        }
    }

    /// Creates a CreateList payload.
    pub fn create_list(list_name: impl Into<String>) -> Self {
        ActionPayload::CreateList {
            list_name: list_name.into(),
        }
    }

    /// Creates a DeleteList payload.
    pub fn delete_list(list_id: impl Into<String>) -> Self {
        ActionPayload::DeleteList {
            list_id: list_id.into(),
        }
    }

    /// Returns the type tag, for logging and display.
    pub fn kind(&self) -> &'static str {
        match self {
            ActionPayload::MoveTask { .. } => "moveTask",
            ActionPayload::CreateList { .. } => "createList",
            ActionPayload::DeleteList { .. } => "deleteList",
        }
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
