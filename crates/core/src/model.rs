// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core data types for the taskmir mirror.
//!
//! This module contains the mirrored entities: List, Task (with TaskBody and
//! Importance), the TaskDraft used when re-creating a task remotely, and the
//! keyed Settings blob.
//!
//! All serde renames are camelCase because these types are exchanged with the
//! remote service and persisted in the same shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A remote task list, mirrored locally.
///
/// Identity is assigned by the remote service; the mirrored set is replaced
/// wholesale on every pull.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    /// Remote-assigned identifier.
    pub id: String,
    /// Human-readable list name.
    pub display_name: String,
}

impl List {
    /// Creates a list with the given id and name.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        List {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    Normal,
    High,
}

impl Importance {
    /// Returns the string representation used in storage and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Low => "low",
            Importance::Normal => "normal",
            Importance::High => "high",
        }
    }
}

impl Default for Importance {
    fn default() -> Self {
        Importance::Normal
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Importance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Importance::Low),
            "normal" => Ok(Importance::Normal),
            "high" => Ok(Importance::High),
            _ => Err(Error::InvalidImportance(s.to_string())),
        }
    }
}

/// Content type of a task body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Text,
    Html,
}

impl BodyType {
    /// Returns the string representation used in storage and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::Text => "text",
            BodyType::Html => "html",
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BodyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(BodyType::Text),
            "html" => Ok(BodyType::Html),
            _ => Err(Error::InvalidBodyType(s.to_string())),
        }
    }
}

/// Free-form note attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBody {
    /// How the content should be interpreted.
    pub content_type: BodyType,
    /// The note content itself.
    pub content: String,
}

/// A task mirrored from the remote service.
///
/// A task belongs to exactly one list; `list_id` always carries the id of the
/// list it was last pulled under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Remote-assigned identifier.
    pub id: String,
    /// The list this task belongs to.
    ///
    /// The remote wire shape omits this field; whoever fetched the task
    /// stamps it with the list it was pulled under.
    #[serde(default)]
    pub list_id: String,
    /// Short description of the task.
    pub title: String,
    /// Priority.
    #[serde(default)]
    pub importance: Importance,
    /// Optional note body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<TaskBody>,
    /// Optional due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a task with default importance and no body or due date.
    pub fn new(id: impl Into<String>, list_id: impl Into<String>, title: impl Into<String>) -> Self {
        Task {
            id: id.into(),
            list_id: list_id.into(),
            title: title.into(),
            importance: Importance::Normal,
            body: None,
            due_date_time: None,
        }
    }

    /// Extracts the safe-to-set fields for re-creating this task remotely.
    ///
    /// The remote service assigns identity; only title, importance, body and
    /// due date survive a move between lists.
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            importance: self.importance,
            body: self.body.clone(),
            due_date_time: self.due_date_time,
        }
    }
}

/// The fields a client is allowed to set when creating a task remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub importance: Importance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<TaskBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<DateTime<Utc>>,
}

/// A keyed, opaque configuration blob.
///
/// Settings are mutated directly and never go through the action queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Well-known key (e.g. "layout").
    pub key: String,
    /// Opaque value owned by the surrounding application.
    pub value: serde_json::Value,
}

impl Settings {
    /// Creates a settings entry.
    pub fn new(key: impl Into<String>, value: serde_json::Value) -> Self {
        Settings {
            key: key.into(),
            value,
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
