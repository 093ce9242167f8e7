//! Headless driver for the task list.
//!
//! Each input line is one command:
//!
//! ```text
//! add Buy milk
//! toggle #1
//! delete 1700000000000
//! list
//! ```
//!
//! A task reference is either a task id or `#N`, the 1-based position in
//! the current list. Blank lines and `#` comments are skipped.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::cmd::OutputFormat;
use crate::config::Config;
use crate::error::{Result, TodoError};
use crate::list::TaskList;
use crate::task::TaskId;

/// How a script line names a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskRef {
    Id(TaskId),
    Position(usize),
}

impl TaskRef {
    fn parse(raw: &str) -> std::result::Result<Self, String> {
        match raw.strip_prefix('#') {
            Some(n) => match n.parse::<usize>() {
                Ok(pos) if pos > 0 => Ok(TaskRef::Position(pos)),
                _ => Err(format!("invalid position `{raw}`, expected #1, #2, ...")),
            },
            None => Ok(TaskRef::Id(TaskId::new(raw))),
        }
    }

    /// Resolve to an id in `list`. Positions past the end resolve to nothing.
    fn resolve(&self, list: &TaskList) -> Option<TaskId> {
        match self {
            TaskRef::Id(id) => Some(id.clone()),
            TaskRef::Position(pos) => list.tasks().get(pos - 1).map(|t| t.id.clone()),
        }
    }
}

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Add(String),
    Toggle(TaskRef),
    Delete(TaskRef),
    List,
}

/// Parse one line. Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> std::result::Result<Option<ScriptCommand>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "add" => ScriptCommand::Add(rest.to_string()),
        "toggle" | "done" => ScriptCommand::Toggle(require_ref(word, rest)?),
        "delete" | "rm" => ScriptCommand::Delete(require_ref(word, rest)?),
        "list" | "ls" => ScriptCommand::List,
        other => return Err(format!("unknown command `{other}`")),
    };
    Ok(Some(command))
}

fn require_ref(word: &str, rest: &str) -> std::result::Result<TaskRef, String> {
    if rest.is_empty() {
        return Err(format!("`{word}` needs a task id or #position"));
    }
    TaskRef::parse(rest)
}

/// Run a script against a fresh list and print the final list.
///
/// Bad lines are reported to `err` and skipped; with `strict` the first one
/// aborts the run.
pub fn run<R: BufRead, W: Write, E: Write>(
    config: &Config,
    input: R,
    out: &mut W,
    err: &mut E,
    format: OutputFormat,
    strict: bool,
) -> Result<TaskList> {
    let mut list = config.new_list();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                let error = TodoError::script(line_no, message);
                if strict {
                    return Err(error);
                }
                warn!(line = line_no, "skipping bad script line");
                writeln!(err, "{error}")?;
                continue;
            }
        };
        apply(&mut list, command, config, out, format)?;
    }

    info!(tasks = list.len(), done = list.completed_count(), "script finished");
    print_list(&list, config, out, format)?;
    Ok(list)
}

fn apply<W: Write>(
    list: &mut TaskList,
    command: ScriptCommand,
    config: &Config,
    out: &mut W,
    format: OutputFormat,
) -> Result<()> {
    match command {
        ScriptCommand::Add(title) => {
            list.set_buffer(title);
            list.submit();
        }
        ScriptCommand::Toggle(target) => {
            if let Some(id) = target.resolve(list) {
                list.toggle(&id);
            }
        }
        ScriptCommand::Delete(target) => {
            if let Some(id) = target.resolve(list) {
                list.delete(&id);
            }
        }
        ScriptCommand::List => print_list(list, config, out, format)?,
    }
    Ok(())
}

/// Write the list in the requested format.
pub fn print_list<W: Write>(
    list: &TaskList,
    config: &Config,
    out: &mut W,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string(list.tasks())?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Text => {
            if list.is_empty() {
                writeln!(out, "{}", config.empty_message)?;
            }
            for task in list.tasks() {
                let mark = if task.done { "[x]" } else { "[ ]" };
                writeln!(out, "{} {}  ({})", mark, task.title, task.id)?;
            }
        }
    }
    Ok(())
}
