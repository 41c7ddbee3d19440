// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end scenarios driving the full offline cycle: mutate while the
//! remote is unreachable, then sync and verify the mirror converges.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use tm_core::{ActionPayload, Store};

use super::engine::{SyncEngine, SyncStatus};
use super::remote_tests::MockRemote;
use super::test_helpers::{make_list, make_task};

#[tokio::test]
async fn offline_edits_converge_after_reconnect() {
    let remote = MockRemote::new();
    remote.add_list(make_list("l-inbox", "Inbox"));
    remote.add_list(make_list("l-done", "Done"));
    let task = make_task("t-1", "l-inbox", "Ship release");
    remote.set_tasks("l-inbox", vec![task.clone()]);

    let engine = SyncEngine::new(Store::open_in_memory().unwrap(), remote);
    assert_eq!(engine.sync().await, SyncStatus::Completed);

    // Queue edits while "offline": move the task, add a list, drop a list
    engine
        .enqueue(ActionPayload::move_task("l-inbox", "l-done", task))
        .unwrap();
    engine.enqueue(ActionPayload::create_list("Someday")).unwrap();
    engine.enqueue(ActionPayload::delete_list("l-inbox")).unwrap();
    assert_eq!(engine.store().queued_len().unwrap(), 3);

    assert_eq!(engine.sync().await, SyncStatus::Completed);
    assert_eq!(engine.store().queued_len().unwrap(), 0);

    let store = engine.store();
    let lists = store.get_all_lists().unwrap();
    let names: Vec<&str> = lists.iter().map(|l| l.display_name.as_str()).collect();
    assert_eq!(names, vec!["Done", "Someday"]);

    let done_id = &lists[0].id;
    let moved = store.get_tasks_for_list(done_id).unwrap();
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0].title, "Ship release");
}

#[tokio::test]
async fn queue_survives_restart_and_replays() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("mirror.db");

    {
        let store = Store::open(&db_path).unwrap();
        let engine = SyncEngine::new(store, MockRemote::new());
        engine.enqueue(ActionPayload::create_list("Work")).unwrap();
        engine.enqueue(ActionPayload::create_list("Home")).unwrap();
    }

    // "Restart": reopen the same database with a fresh engine and remote
    let store = Store::open(&db_path).unwrap();
    let engine = SyncEngine::new(store, MockRemote::new());
    assert_eq!(engine.store().queued_len().unwrap(), 2);

    assert_eq!(engine.sync().await, SyncStatus::Completed);
    assert_eq!(engine.store().queued_len().unwrap(), 0);

    let lists = engine.store().get_all_lists().unwrap();
    let names: Vec<&str> = lists.iter().map(|l| l.display_name.as_str()).collect();
    assert_eq!(names, vec!["Work", "Home"]);
}

#[tokio::test]
async fn failed_sync_leaves_mirror_usable_offline() {
    let remote = MockRemote::new();
    remote.add_list(make_list("l-1", "Inbox"));
    remote.set_tasks("l-1", vec![make_task("t-1", "l-1", "Buy milk")]);

    let engine = SyncEngine::new(Store::open_in_memory().unwrap(), remote);
    assert_eq!(engine.sync().await, SyncStatus::Completed);

    // The remote goes away; a queued edit plus a sync attempt fail
    engine.remote().fail_on("listLists");
    engine.remote().fail_on("createList");
    engine.enqueue(ActionPayload::create_list("Work")).unwrap();
    assert_eq!(engine.sync().await, SyncStatus::Failed);

    // The mirror still serves the last good snapshot and the edit is kept
    let store = engine.store();
    assert_eq!(store.get_all_lists().unwrap().len(), 1);
    assert_eq!(store.get_tasks_for_list("l-1").unwrap()[0].title, "Buy milk");
    assert_eq!(store.queued_len().unwrap(), 1);
}
