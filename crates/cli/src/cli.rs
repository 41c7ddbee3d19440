// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand};

const QUICKSTART_HELP: &str = "\
Get started:
  taskmir sync                  Pull lists and tasks from the remote
  taskmir lists                 Show the mirrored lists
  taskmir tasks <list>          Show the tasks of a list
  taskmir move <task> <list>    Queue a task move for the next sync";

#[derive(Parser)]
#[command(name = "taskmir")]
#[command(about = "An offline-first mirror of your remote task lists")]
#[command(
    long_about = "An offline-first mirror of your remote task lists.\n\n\
    Reads always hit the local mirror; edits queue up and replay on the next sync."
)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay queued changes and refresh the local mirror
    Sync,

    /// Show mirror statistics and pending changes
    Status,

    /// List the mirrored task lists
    Lists,

    /// List the tasks of a mirrored list
    Tasks {
        /// List id or display name
        list: String,
    },

    /// Queue a task move to another list
    #[command(after_help = "Examples:\n  \
        taskmir move AAMkAD… Done        Move a task into the 'Done' list\n  \
        taskmir sync                     Apply the queued move")]
    Move {
        /// Task id (as shown by 'taskmir tasks')
        task: String,

        /// Destination list id or display name
        destination: String,
    },

    /// Queue creation of a new list
    NewList {
        /// Display name of the new list
        name: String,
    },

    /// Queue deletion of a list
    RmList {
        /// List id or display name
        list: String,
    },
}
