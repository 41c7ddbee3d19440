// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn task_not_found_display() {
    let err = Error::TaskNotFound("t-123".to_string());
    assert_eq!(err.to_string(), "task not found: t-123");
}

#[test]
fn invalid_importance_has_hint() {
    let err = Error::InvalidImportance("urgent".to_string());
    let msg = err.to_string();
    assert!(msg.contains("urgent"));
    assert!(msg.contains("hint"));
    assert!(msg.contains("low, normal, high"));
}

#[test]
fn invalid_body_type_has_hint() {
    let err = Error::InvalidBodyType("markdown".to_string());
    let msg = err.to_string();
    assert!(msg.contains("markdown"));
    assert!(msg.contains("text, html"));
}

#[test]
fn io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
    assert!(err.to_string().starts_with("io error:"));
}

#[test]
fn corrupted_data_display() {
    let err = Error::CorruptedData("bad row".to_string());
    assert_eq!(err.to_string(), "corrupted data: bad row");
}
