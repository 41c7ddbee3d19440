// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tm-core operations.

use thiserror::Error;

/// All possible errors that can occur in tm-core operations.
///
/// Every variant represents a local persistence failure; callers must not
/// assume any partial write happened once one of these surfaces.
#[derive(Debug, Error)]
pub enum Error {
    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("invalid importance: '{0}'\n  hint: valid values are: low, normal, high")]
    InvalidImportance(String),

    #[error("invalid body type: '{0}'\n  hint: valid values are: text, html")]
    InvalidBodyType(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for tm-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
