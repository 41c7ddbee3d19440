// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::action::ActionPayload;
use crate::model::{BodyType, Importance, Settings, Task, TaskBody};

fn test_task(id: &str, list_id: &str, title: &str) -> Task {
    Task::new(id.to_string(), list_id.to_string(), title.to_string())
}

#[test]
fn replace_and_get_lists() {
    let mut store = Store::open_in_memory().unwrap();

    let lists = vec![List::new("l-1", "Inbox"), List::new("l-2", "Done")];
    store.replace_all_lists(&lists).unwrap();

    let got = store.get_all_lists().unwrap();
    assert_eq!(got, lists);
}

#[test]
fn replace_all_lists_overwrites_previous_snapshot() {
    let mut store = Store::open_in_memory().unwrap();

    store
        .replace_all_lists(&[List::new("l-1", "Old"), List::new("l-2", "Gone")])
        .unwrap();
    store.replace_all_lists(&[List::new("l-3", "New")]).unwrap();

    let got = store.get_all_lists().unwrap();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].id, "l-3");
}

#[test]
fn replace_all_lists_empty_yields_empty() {
    let mut store = Store::open_in_memory().unwrap();
    store.replace_all_lists(&[List::new("l-1", "Inbox")]).unwrap();

    store.replace_all_lists(&[]).unwrap();
    assert!(store.get_all_lists().unwrap().is_empty());
}

#[test]
fn get_all_lists_empty_store() {
    let store = Store::open_in_memory().unwrap();
    assert!(store.get_all_lists().unwrap().is_empty());
}

#[test]
fn replace_tasks_for_list_round_trip() {
    let mut store = Store::open_in_memory().unwrap();

    let mut task = test_task("t-1", "l-1", "Write report");
    task.importance = Importance::High;
    task.body = Some(TaskBody {
        content_type: BodyType::Text,
        content: "draft by friday".to_string(),
    });

    store.replace_tasks_for_list("l-1", &[task.clone()]).unwrap();

    let got = store.get_tasks_for_list("l-1").unwrap();
    assert_eq!(got, vec![task]);
}

#[test]
fn replace_tasks_stamps_list_id() {
    let mut store = Store::open_in_memory().unwrap();

    // Task claims to belong to another list; the replace target wins
    let task = test_task("t-1", "l-other", "Stray");
    store.replace_tasks_for_list("l-1", &[task]).unwrap();

    let got = store.get_tasks_for_list("l-1").unwrap();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].list_id, "l-1");
    assert!(store.get_tasks_for_list("l-other").unwrap().is_empty());
}

#[test]
fn replace_tasks_leaves_other_lists_untouched() {
    let mut store = Store::open_in_memory().unwrap();

    store
        .replace_tasks_for_list("l-1", &[test_task("t-1", "l-1", "Keep me")])
        .unwrap();
    store
        .replace_tasks_for_list("l-2", &[test_task("t-2", "l-2", "Replace me")])
        .unwrap();

    store.replace_tasks_for_list("l-2", &[]).unwrap();

    assert_eq!(store.get_tasks_for_list("l-1").unwrap().len(), 1);
    assert!(store.get_tasks_for_list("l-2").unwrap().is_empty());
}

#[test]
fn get_task_point_read() {
    let mut store = Store::open_in_memory().unwrap();
    store
        .replace_tasks_for_list("l-1", &[test_task("t-1", "l-1", "Here")])
        .unwrap();

    let got = store.get_task("t-1").unwrap();
    assert_eq!(got.unwrap().title, "Here");
    assert!(store.get_task("t-404").unwrap().is_none());
}

#[test]
fn settings_put_and_get() {
    let store = Store::open_in_memory().unwrap();

    assert!(store.get_settings("layout").unwrap().is_none());

    let settings = Settings::new("layout", serde_json::json!({"columns": 4}));
    store.put_settings(&settings).unwrap();

    let got = store.get_settings("layout").unwrap().unwrap();
    assert_eq!(got, settings);
}

#[test]
fn settings_put_overwrites() {
    let store = Store::open_in_memory().unwrap();

    store
        .put_settings(&Settings::new("layout", serde_json::json!(1)))
        .unwrap();
    store
        .put_settings(&Settings::new("layout", serde_json::json!(2)))
        .unwrap();

    let got = store.get_settings("layout").unwrap().unwrap();
    assert_eq!(got.value, serde_json::json!(2));
}

#[test]
fn enqueue_assigns_increasing_ids() {
    let store = Store::open_in_memory().unwrap();

    let a = store.enqueue_action(&ActionPayload::create_list("A")).unwrap();
    let b = store.enqueue_action(&ActionPayload::create_list("B")).unwrap();
    let c = store.enqueue_action(&ActionPayload::delete_list("l-1")).unwrap();

    assert!(a < b && b < c);

    let actions = store.list_queued_actions().unwrap();
    assert_eq!(actions.len(), 3);
    assert_eq!(actions[0].id, a);
    assert_eq!(actions[1].id, b);
    assert_eq!(actions[2].id, c);
}

#[test]
fn queue_ids_are_never_reused() {
    let store = Store::open_in_memory().unwrap();

    let a = store.enqueue_action(&ActionPayload::create_list("A")).unwrap();
    store.dequeue_action(a).unwrap();

    // AUTOINCREMENT: the freed id must not come back
    let b = store.enqueue_action(&ActionPayload::create_list("B")).unwrap();
    assert!(b > a);
}

#[test]
fn dequeue_is_idempotent() {
    let store = Store::open_in_memory().unwrap();

    let a = store.enqueue_action(&ActionPayload::create_list("A")).unwrap();
    store.dequeue_action(a).unwrap();
    store.dequeue_action(a).unwrap();
    store.dequeue_action(9999).unwrap();

    assert_eq!(store.queued_len().unwrap(), 0);
}

#[test]
fn queued_payload_round_trips() {
    let store = Store::open_in_memory().unwrap();

    let task = test_task("t-1", "l-a", "Move me");
    let payload = ActionPayload::move_task("l-a", "l-b", task);
    store.enqueue_action(&payload).unwrap();

    let actions = store.list_queued_actions().unwrap();
    assert_eq!(actions[0].payload, payload);
}

#[test]
fn store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mirror.db");

    {
        let mut store = Store::open(&path).unwrap();
        store.replace_all_lists(&[List::new("l-1", "Inbox")]).unwrap();
        store
            .replace_tasks_for_list("l-1", &[test_task("t-1", "l-1", "Persisted")])
            .unwrap();
        store.enqueue_action(&ActionPayload::create_list("Work")).unwrap();
    }

    let store = Store::open(&path).unwrap();
    assert_eq!(store.get_all_lists().unwrap().len(), 1);
    assert_eq!(store.get_tasks_for_list("l-1").unwrap()[0].title, "Persisted");
    assert_eq!(store.queued_len().unwrap(), 1);
}
