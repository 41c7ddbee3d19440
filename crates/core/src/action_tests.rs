// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::model::Task;

#[test]
fn create_list_serializes_with_type_tag() {
    let payload = ActionPayload::create_list("Work");
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["type"], "createList");
    assert_eq!(json["listName"], "Work");
}

#[test]
fn delete_list_serializes_with_type_tag() {
    let payload = ActionPayload::delete_list("l-1");
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["type"], "deleteList");
    assert_eq!(json["listId"], "l-1");
}

#[test]
fn move_task_serializes_with_type_tag() {
    let task = Task::new("t-1", "l-a", "Title");
    let payload = ActionPayload::move_task("l-a", "l-b", task);
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["type"], "moveTask");
    assert_eq!(json["sourceListId"], "l-a");
    assert_eq!(json["destinationListId"], "l-b");
    assert_eq!(json["taskToMove"]["id"], "t-1");
}

#[test]
fn payload_round_trips_through_json() {
    let task = Task::new("t-1", "l-a", "Title");
    let payload = ActionPayload::move_task("l-a", "l-b", task);
    let json = serde_json::to_string(&payload).unwrap();
    let back: ActionPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(back, payload);
}

#[test]
fn unknown_type_tag_is_rejected() {
    let json = r#"{ "type": "renameList", "listId": "l-1" }"#;
    let result: serde_json::Result<ActionPayload> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn kind_matches_type_tag() {
    let task = Task::new("t-1", "l-a", "Title");
    assert_eq!(ActionPayload::move_task("a", "b", task).kind(), "moveTask");
    assert_eq!(ActionPayload::create_list("x").kind(), "createList");
    assert_eq!(ActionPayload::delete_list("x").kind(), "deleteList");
}
