use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;
use crate::config::Config;

/// Single-screen to-do list. Tasks live in memory only.
/// Runs the interactive UI when no subcommand is given.
#[derive(Parser)]
#[command(name = "todo", version, about = "Quick in-memory to-do list for the terminal")]
pub struct Cli {
    /// Heading shown above the input field.
    #[arg(long, global = true, env = "TODO_TITLE", default_value = "Task List")]
    pub title: String,

    /// Hint shown in the input field while it is empty.
    #[arg(long, global = true, env = "TODO_PLACEHOLDER", default_value = "Type a new task...")]
    pub placeholder: String,

    /// Message shown when there are no tasks.
    #[arg(long, global = true, env = "TODO_EMPTY_MESSAGE", default_value = "No tasks added yet.")]
    pub empty_message: String,

    /// Append log output to this file.
    #[arg(long, global = true, env = "TODO_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. `info` or `todo_screen=debug`.
    #[arg(long, global = true, env = "TODO_LOG", default_value = "info")]
    pub log_level: String,

    /// Number tasks 1, 2, 3... instead of using timestamps.
    #[arg(long, global = true)]
    pub sequential_ids: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Collect the display and id settings shared by every command.
    pub fn config(&self) -> Config {
        Config {
            title: self.title.clone(),
            placeholder: self.placeholder.clone(),
            empty_message: self.empty_message.clone(),
            sequential_ids: self.sequential_ids,
        }
    }
}
