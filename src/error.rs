//! Error types for the program surface around the task list.
//!
//! The list operations themselves never fail; these cover I/O, JSON output,
//! logging setup and script parsing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode tasks as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to set up logging: {0}")]
    Logging(String),

    #[error("line {line}: {message}")]
    Script { line: usize, message: String },
}

impl TodoError {
    pub fn script(line: usize, message: impl Into<String>) -> Self {
        TodoError::Script {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_message_is_not_terminal_specific() {
        let err = TodoError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed"));
        assert_eq!(err.to_string(), "I/O failed: stdout closed");
    }

    #[test]
    fn test_json_errors_keep_their_own_variant() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(TodoError::from(json_err), TodoError::Json(_)));
    }
}
