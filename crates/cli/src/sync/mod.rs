// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline sync between the local mirror and the remote task service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ SyncEngine  │────►│ RemoteClient │────►│   Remote    │
//! │             │◄────│   (trait)    │◄────│   Service   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   Store     │  (mirror + durable action queue)
//! └─────────────┘
//! ```
//!
//! # Guarantees
//!
//! - Single-flight: at most one sync attempt per engine instance; concurrent
//!   callers are told "skipped", never queued or blocked.
//! - Queued actions drain strictly in insertion order, halting on the first
//!   failure so causal dependencies between actions survive retries.
//! - Deletes are idempotent against the remote: "not found" counts as done.
//! - The pull phase overwrites the mirror with full remote snapshots.

mod engine;
mod http;
mod remote;

pub use engine::{SyncEngine, SyncError, SyncResult, SyncStatus};
pub use http::{EnvToken, HttpRemote, StaticToken, TokenSource};
pub use remote::{RemoteClient, RemoteError, RemoteResult};

#[cfg(test)]
mod test_helpers;




#[cfg(test)]
mod integration_tests;
