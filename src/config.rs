//! Runtime settings shared by the UI and script mode.

use crate::ids::{SequentialIds, TimestampIds};
use crate::list::TaskList;

/// Display text and id policy, collected from flags and environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub placeholder: String,
    pub empty_message: String,
    pub sequential_ids: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: "Task List".to_string(),
            placeholder: "Type a new task...".to_string(),
            empty_message: "No tasks added yet.".to_string(),
            sequential_ids: false,
        }
    }
}

impl Config {
    /// Build an empty task list using the configured id source.
    pub fn new_list(&self) -> TaskList {
        if self.sequential_ids {
            TaskList::new(Box::new(SequentialIds::default()))
        } else {
            TaskList::new(Box::new(TimestampIds::system()))
        }
    }
}
