// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync module tests.

use tm_core::{Importance, List, Task};

/// Create a test list.
pub fn make_list(id: &str, name: &str) -> List {
    List::new(id, name)
}

/// Create a test task belonging to the given list.
pub fn make_task(id: &str, list_id: &str, title: &str) -> Task {
    Task::new(id, list_id, title)
}

/// Create a high-importance test task belonging to the given list.
pub fn make_urgent_task(id: &str, list_id: &str, title: &str) -> Task {
    let mut task = Task::new(id, list_id, title);
    task.importance = Importance::High;
    task
}
