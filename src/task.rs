//! Task data structure.
//!
//! A `Task` is a single to-do entry: an opaque id, a title fixed at creation
//! and a completion flag.

use std::fmt;

use serde::Serialize;

/// Opaque task identifier, unique within a list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(raw: impl Into<String>) -> Self {
        TaskId(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

impl Task {
    /// Create an open task.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Task {
            id,
            title: title.into(),
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_serializes_with_plain_id() {
        let task = Task::new(TaskId::new("1700000000000"), "Buy milk");
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":"1700000000000","title":"Buy milk","done":false}"#);
    }
}
