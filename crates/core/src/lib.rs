// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tm-core: Shared library for the taskmir offline task mirror.
//!
//! This crate provides the data model, the SQLite-backed durable store, and
//! the pending-action queue types used by the taskmir CLI. It is fully
//! synchronous; the sync orchestrator in the CLI crate drives it.

pub mod action;
pub mod error;
pub mod model;
pub mod store;

pub use action::{ActionPayload, QueuedAction};
pub use error::{Error, Result};
pub use model::{BodyType, Importance, List, Settings, Task, TaskBody, TaskDraft};
pub use store::Store;
