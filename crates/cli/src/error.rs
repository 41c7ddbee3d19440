// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the taskmir library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("list not found: {0}\n  hint: run 'taskmir lists' to see known lists, or 'taskmir sync' to refresh them")]
    ListNotFound(String),

    #[error("ambiguous list name '{name}' matches: {}", matches.join(", "))]
    AmbiguousList { name: String, matches: Vec<String> },

    #[error("task not found: {0}\n  hint: run 'taskmir sync' to refresh the local mirror")]
    TaskNotFound(String),

    #[error("sync failed\n  hint: pending changes stay queued; run 'taskmir sync' again once the remote is reachable")]
    SyncFailed,

    #[error("could not determine the user's home directory")]
    NoHomeDirectory,

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] tm_core::Error),
}

/// A specialized Result type for taskmir operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
