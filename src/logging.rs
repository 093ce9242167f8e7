//! Tracing subscriber setup.
//!
//! The UI owns the terminal, so interactive sessions only log to a file.
//! Script runs fall back to stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::cmd::Commands;
use crate::error::{Result, TodoError};

/// Where log output should go.
#[derive(Debug, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Off,
}

impl<'a> LogTarget<'a> {
    /// Pick the destination for `command`: an explicit log file always
    /// wins, script runs fall back to stderr, the UI logs nowhere.
    pub fn for_command(log_file: Option<&'a Path>, command: &Commands) -> Self {
        match (log_file, command) {
            (Some(path), _) => LogTarget::File(path),
            (None, Commands::Script { .. }) => LogTarget::Stderr,
            (None, _) => LogTarget::Off,
        }
    }
}

/// Install the global subscriber for `target` at `level`.
///
/// `level` accepts any `EnvFilter` directive, e.g. `debug` or
/// `todo_screen=trace`.
pub fn init(level: &str, target: LogTarget<'_>) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| TodoError::Logging(format!("invalid log level `{level}`: {e}")))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    TodoError::Logging(format!("cannot open log file {}: {e}", path.display()))
                })?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
    };
    installed.map_err(|e| TodoError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::OutputFormat;

    fn script() -> Commands {
        Commands::Script {
            format: OutputFormat::Text,
            strict: false,
        }
    }

    #[test]
    fn test_ui_without_log_file_logs_nowhere() {
        assert_eq!(LogTarget::for_command(None, &Commands::Ui), LogTarget::Off);
    }

    #[test]
    fn test_script_without_log_file_uses_stderr() {
        assert_eq!(LogTarget::for_command(None, &script()), LogTarget::Stderr);
    }

    #[test]
    fn test_log_file_wins_for_every_command() {
        let path = Path::new("/tmp/todo.log");
        assert_eq!(LogTarget::for_command(Some(path), &Commands::Ui), LogTarget::File(path));
        assert_eq!(LogTarget::for_command(Some(path), &script()), LogTarget::File(path));
    }

    // The only test that installs the global subscriber.
    #[test]
    fn test_file_target_creates_and_appends() {
        let path = std::env::temp_dir().join(format!("todo_screen_{}.log", std::process::id()));
        std::fs::write(&path, "earlier line\n").unwrap();

        init("info", LogTarget::File(&path)).unwrap();
        tracing::info!("file logging works");

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(contents.starts_with("earlier line\n"));
        assert!(contents.contains("file logging works"));
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let err = init("todo_screen=loud", LogTarget::Off).unwrap_err();
        assert!(err.to_string().contains("invalid log level"));
    }

    #[test]
    fn test_off_installs_nothing() {
        assert!(init("info", LogTarget::Off).is_ok());
    }
}
