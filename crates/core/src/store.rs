// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed durable store for the local mirror.
//!
//! The [`Store`] struct persists the mirrored lists and tasks, the keyed
//! settings blob, and the pending-action queue. Replace operations run in a
//! single transaction so readers never observe a half-replaced collection.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::action::{ActionPayload, QueuedAction};
use crate::error::{Error, Result};
use crate::model::{List, Settings, Task, TaskBody};

/// SQL schema for the mirror database.
///
/// `action_queue` uses AUTOINCREMENT so ids are strictly increasing and never
/// reused, even after a dequeue; drain order is id order.
pub const SCHEMA: &str = r#"
-- Mirrored lists, replaced wholesale on every pull
CREATE TABLE IF NOT EXISTS lists (
    id TEXT PRIMARY KEY,
    display_name TEXT NOT NULL
);

-- Mirrored tasks, replaced per list on every pull
CREATE TABLE IF NOT EXISTS tasks (
    id TEXT PRIMARY KEY,
    list_id TEXT NOT NULL,
    title TEXT NOT NULL,
    importance TEXT NOT NULL DEFAULT 'normal',
    body_content_type TEXT,
    body_content TEXT,
    due_date_time TEXT
);

-- Keyed opaque configuration blobs
CREATE TABLE IF NOT EXISTS settings (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

-- Pending mutations, drained in id order by the sync engine
CREATE TABLE IF NOT EXISTS action_queue (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    payload TEXT NOT NULL
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_tasks_list ON tasks(list_id);
"#;

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid value '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Parse an optional RFC3339 timestamp from the database.
fn parse_timestamp_opt(
    value: Option<String>,
    column: &str,
) -> std::result::Result<Option<DateTime<Utc>>, rusqlite::Error> {
    match value {
        None => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|_| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(Error::CorruptedData(format!(
                        "invalid timestamp '{s}' in column '{column}'"
                    ))),
                )
            }),
    }
}

/// Map a task row to a [`Task`].
///
/// Column order: id, list_id, title, importance, body_content_type,
/// body_content, due_date_time.
fn task_from_row(row: &rusqlite::Row<'_>) -> std::result::Result<Task, rusqlite::Error> {
    let importance_str: String = row.get(3)?;
    let body_type: Option<String> = row.get(4)?;
    let body_content: Option<String> = row.get(5)?;
    let due_str: Option<String> = row.get(6)?;

    let body = match (body_type, body_content) {
        (Some(t), Some(content)) => Some(TaskBody {
            content_type: parse_db(&t, "body_content_type")?,
            content,
        }),
        _ => None,
    };

    Ok(Task {
        id: row.get(0)?,
        list_id: row.get(1)?,
        title: row.get(2)?,
        importance: parse_db(&importance_str, "importance")?,
        body,
        due_date_time: parse_timestamp_opt(due_str, "due_date_time")?,
    })
}

/// Run schema creation on a database connection.
///
/// The schema is idempotent; reopening an existing mirror is a no-op.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// SQLite database connection with mirror and queue operations.
pub struct Store {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Store {
    /// Open a store at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // Enable foreign keys and WAL mode for concurrency
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let store = Store { conn };
        run_migrations(&store.conn)?;
        Ok(store)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let store = Store { conn };
        run_migrations(&store.conn)?;
        Ok(store)
    }

    /// Replace the entire mirrored list collection.
    ///
    /// Clear and insert run in one transaction: a crash mid-operation rolls
    /// back to the previous snapshot, and concurrent readers never observe
    /// an empty collection.
    pub fn replace_all_lists(&mut self, lists: &[List]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM lists", [])?;
        {
            let mut stmt = tx.prepare("INSERT INTO lists (id, display_name) VALUES (?1, ?2)")?;
            for list in lists {
                stmt.execute(params![list.id, list.display_name])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Replace the mirrored tasks of one list.
    ///
    /// Deletes every task currently indexed under `list_id`, then inserts the
    /// given tasks stamped with `list_id`, all in one transaction. Tasks of
    /// other lists are not disturbed.
    pub fn replace_tasks_for_list(&mut self, list_id: &str, tasks: &[Task]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM tasks WHERE list_id = ?1", params![list_id])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO tasks (id, list_id, title, importance,
                 body_content_type, body_content, due_date_time)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for task in tasks {
                stmt.execute(params![
                    task.id,
                    list_id,
                    task.title,
                    task.importance.as_str(),
                    task.body.as_ref().map(|b| b.content_type.as_str()),
                    task.body.as_ref().map(|b| b.content.as_str()),
                    task.due_date_time.map(|dt| dt.to_rfc3339()),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Get all mirrored lists in insertion (pull) order.
    pub fn get_all_lists(&self) -> Result<Vec<List>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, display_name FROM lists ORDER BY rowid")?;

        let lists = stmt
            .query_map([], |row| {
                Ok(List {
                    id: row.get(0)?,
                    display_name: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(lists)
    }

    /// Get all mirrored tasks of a list, in insertion (pull) order.
    ///
    /// Returns an empty vec if the list is unknown or has no tasks.
    pub fn get_tasks_for_list(&self, list_id: &str) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, list_id, title, importance, body_content_type,
             body_content, due_date_time
             FROM tasks WHERE list_id = ?1 ORDER BY rowid",
        )?;

        let tasks = stmt
            .query_map(params![list_id], task_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    /// Get a mirrored task by id.
    pub fn get_task(&self, id: &str) -> Result<Option<Task>> {
        let task = self
            .conn
            .query_row(
                "SELECT id, list_id, title, importance, body_content_type,
                 body_content, due_date_time
                 FROM tasks WHERE id = ?1",
                params![id],
                task_from_row,
            )
            .optional()?;

        Ok(task)
    }

    /// Get a settings entry by key.
    pub fn get_settings(&self, key: &str) -> Result<Option<Settings>> {
        let row: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        match row {
            None => Ok(None),
            Some(value) => Ok(Some(Settings {
                key: key.to_string(),
                value: serde_json::from_str(&value)?,
            })),
        }
    }

    /// Insert or overwrite a settings entry.
    pub fn put_settings(&self, settings: &Settings) -> Result<()> {
        let value = serde_json::to_string(&settings.value)?;
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![settings.key, value],
        )?;
        Ok(())
    }

    /// Append a pending action to the queue.
    ///
    /// Returns the store-assigned id. Ids are strictly increasing and never
    /// reused.
    pub fn enqueue_action(&self, payload: &ActionPayload) -> Result<i64> {
        let json = serde_json::to_string(payload)?;
        self.conn
            .execute("INSERT INTO action_queue (payload) VALUES (?1)", params![json])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get all pending actions, ordered by id ascending (drain order).
    pub fn list_queued_actions(&self) -> Result<Vec<QueuedAction>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, payload FROM action_queue ORDER BY id ASC")?;

        let actions = stmt
            .query_map([], |row| {
                let id: i64 = row.get(0)?;
                let json: String = row.get(1)?;
                Ok((id, json))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        actions
            .into_iter()
            .map(|(id, json)| {
                let payload = serde_json::from_str(&json)
                    .map_err(|e| Error::CorruptedData(format!("queued action {id}: {e}")))?;
                Ok(QueuedAction { id, payload })
            })
            .collect()
    }

    /// Number of pending actions in the queue.
    pub fn queued_len(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM action_queue", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Delete the queued action with the given id.
    ///
    /// Idempotent: deleting an already-dequeued id is a no-op.
    pub fn dequeue_action(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM action_queue WHERE id = ?1", params![id])?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
