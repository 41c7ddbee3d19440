// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! taskmir - an offline-first mirror of a remote task service.
//!
//! Reads always hit the local SQLite mirror; edits never touch it directly.
//! Instead they append to a durable action queue, and the next `sync` replays
//! the queue against the remote before pulling a fresh snapshot.
//!
//! # Main Components
//!
//! - [`tm_core::Store`] - SQLite-backed mirror plus the durable action queue
//! - [`sync::SyncEngine`] - drains the queue and refreshes the mirror
//! - [`sync::HttpRemote`] - the HTTP client speaking the remote task API
//! - [`Config`] - remote endpoint and mirror location
//! - [`Error`] - error types for all operations

mod cli;

pub mod config;
pub mod error;
pub mod sync;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{Error, Result};

use tm_core::{ActionPayload, List, Store, Task};

use sync::{EnvToken, HttpRemote, SyncEngine, SyncStatus};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    let config = Config::load()?;
    let store = Store::open(&config.db_path()?)?;

    match command {
        Command::Sync => run_sync(config, store),
        Command::Status => run_status(&store),
        Command::Lists => run_lists(&store),
        Command::Tasks { list } => run_tasks(&store, &list),
        Command::Move { task, destination } => run_move(&store, &task, &destination),
        Command::NewList { name } => run_new_list(&store, &name),
        Command::RmList { list } => run_rm_list(&store, &list),
    }
}

fn run_sync(config: Config, store: Store) -> Result<()> {
    let token = EnvToken::new(config.remote.token_env.clone());
    let remote = HttpRemote::new(&config.remote.base_url, Box::new(token));
    let engine = SyncEngine::new(store, remote);

    let runtime = tokio::runtime::Runtime::new()?;
    match runtime.block_on(engine.sync()) {
        SyncStatus::Completed => {
            let store = engine.store();
            let lists = store.get_all_lists()?;
            println!("sync completed: {} lists mirrored", lists.len());
            Ok(())
        }
        SyncStatus::Skipped => {
            println!("sync already in progress");
            Ok(())
        }
        SyncStatus::Failed => Err(Error::SyncFailed),
    }
}

fn run_status(store: &Store) -> Result<()> {
    let lists = store.get_all_lists()?;
    let mut task_count = 0usize;
    for list in &lists {
        task_count += store.get_tasks_for_list(&list.id)?.len();
    }
    println!("{} lists, {} tasks mirrored", lists.len(), task_count);

    let pending = store.list_queued_actions()?;
    if pending.is_empty() {
        println!("no pending changes");
    } else {
        println!("{} pending change(s):", pending.len());
        for action in pending {
            println!("  #{} {}", action.id, describe_action(&action.payload));
        }
        println!("run 'taskmir sync' to apply them");
    }
    Ok(())
}

fn run_lists(store: &Store) -> Result<()> {
    let lists = store.get_all_lists()?;
    if lists.is_empty() {
        println!("no lists mirrored yet; run 'taskmir sync'");
        return Ok(());
    }
    for list in lists {
        println!("{}  {}", list.id, list.display_name);
    }
    Ok(())
}

fn run_tasks(store: &Store, needle: &str) -> Result<()> {
    let list = resolve_list(store, needle)?;
    let tasks = store.get_tasks_for_list(&list.id)?;
    if tasks.is_empty() {
        println!("no tasks in '{}'", list.display_name);
        return Ok(());
    }
    for task in tasks {
        println!("{}", format_task(&task));
    }
    Ok(())
}

fn run_move(store: &Store, task_id: &str, destination: &str) -> Result<()> {
    let task = store
        .get_task(task_id)?
        .ok_or_else(|| Error::TaskNotFound(task_id.to_string()))?;
    let dest = resolve_list(store, destination)?;

    let source_list_id = task.list_id.clone();
    let id = store.enqueue_action(&ActionPayload::move_task(source_list_id, dest.id, task))?;
    println!(
        "queued move #{}: '{}' -> '{}'; run 'taskmir sync' to apply",
        id, task_id, dest.display_name
    );
    Ok(())
}

fn run_new_list(store: &Store, name: &str) -> Result<()> {
    let id = store.enqueue_action(&ActionPayload::create_list(name))?;
    println!("queued list creation #{}: '{}'; run 'taskmir sync' to apply", id, name);
    Ok(())
}

fn run_rm_list(store: &Store, needle: &str) -> Result<()> {
    let list = resolve_list(store, needle)?;
    let id = store.enqueue_action(&ActionPayload::delete_list(&list.id))?;
    println!(
        "queued list deletion #{}: '{}'; run 'taskmir sync' to apply",
        id, list.display_name
    );
    Ok(())
}

/// Resolve a list by id or display name against the local mirror.
///
/// Id matches win; otherwise the display name must match exactly one list.
fn resolve_list(store: &Store, needle: &str) -> Result<List> {
    let lists = store.get_all_lists()?;

    if let Some(list) = lists.iter().find(|l| l.id == needle) {
        return Ok(list.clone());
    }

    let matches: Vec<&List> = lists.iter().filter(|l| l.display_name == needle).collect();
    match matches.as_slice() {
        [] => Err(Error::ListNotFound(needle.to_string())),
        [list] => Ok((*list).clone()),
        many => Err(Error::AmbiguousList {
            name: needle.to_string(),
            matches: many.iter().map(|l| l.id.clone()).collect(),
        }),
    }
}

fn describe_action(payload: &ActionPayload) -> String {
    match payload {
        ActionPayload::MoveTask {
            destination_list_id,
            task_to_move,
            ..
        } => format!("move '{}' -> {}", task_to_move.title, destination_list_id),
        ActionPayload::CreateList { list_name } => format!("create list '{}'", list_name),
        ActionPayload::DeleteList { list_id } => format!("delete list {}", list_id),
    }
}

fn format_task(task: &Task) -> String {
    let mut line = format!("{}  {}", task.id, task.title);
    if task.importance == tm_core::Importance::High {
        line.push_str("  [high]");
    }
    if let Some(due) = task.due_date_time {
        line.push_str(&format!("  (due {})", due.format("%Y-%m-%d")));
    }
    line
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
