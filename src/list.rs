//! In-memory task list controller.
//!
//! `TaskList` owns the input buffer and the ordered task sequence. Every
//! operation is synchronous and total: blank submissions and unknown ids
//! are silently ignored.

use tracing::{debug, trace};

use crate::ids::IdSource;
use crate::task::{Task, TaskId};

/// Screen state: the text being composed plus the tasks in display order.
pub struct TaskList {
    buffer: String,
    tasks: Vec<Task>,
    ids: Box<dyn IdSource>,
}

impl TaskList {
    /// Create an empty list drawing ids from `ids`.
    pub fn new(ids: Box<dyn IdSource>) -> Self {
        TaskList {
            buffer: String::new(),
            tasks: Vec::new(),
            ids,
        }
    }

    /// Current input buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replace the input buffer.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Append a task built from the buffer and clear the buffer.
    ///
    /// Returns the new task's id, or `None` when the buffer is blank, in
    /// which case nothing changes.
    pub fn submit(&mut self) -> Option<TaskId> {
        if self.buffer.trim().is_empty() {
            trace!("ignoring blank submission");
            return None;
        }

        let id = self.ids.next_id();
        let title = std::mem::take(&mut self.buffer);
        debug!(id = %id, title = %title, "task added");
        self.tasks.push(Task::new(id.clone(), title));
        Some(id)
    }

    /// Flip the completion flag of the task with `id`.
    pub fn toggle(&mut self, id: &TaskId) {
        match self.get_mut(id) {
            Some(task) => {
                task.done = !task.done;
                debug!(id = %id, done = task.done, "task toggled");
            }
            None => trace!(id = %id, "toggle ignored, no such task"),
        }
    }

    /// Remove the task with `id`.
    pub fn delete(&mut self, id: &TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);
        if self.tasks.len() < before {
            debug!(id = %id, remaining = self.tasks.len(), "task deleted");
        } else {
            trace!(id = %id, "delete ignored, no such task");
        }
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    fn get_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks marked done.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;

    fn list() -> TaskList {
        TaskList::new(Box::new(SequentialIds::default()))
    }

    fn add(list: &mut TaskList, title: &str) -> TaskId {
        list.set_buffer(title);
        list.submit().expect("non-blank title should be accepted")
    }

    fn titles(list: &TaskList) -> Vec<&str> {
        list.tasks().iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_submit_appends_open_task_and_clears_buffer() {
        let mut list = list();
        add(&mut list, "Write report");
        let id = add(&mut list, "Buy milk");

        assert_eq!(list.len(), 2);
        let task = list.get(&id).unwrap();
        assert_eq!(task.title, "Buy milk");
        assert!(!task.done);
        assert_eq!(list.tasks().last().unwrap().id, id);
        assert_eq!(list.buffer(), "");
    }

    #[test]
    fn test_submit_keeps_title_as_typed() {
        let mut list = list();
        let id = add(&mut list, "  padded  ");
        assert_eq!(list.get(&id).unwrap().title, "  padded  ");
    }

    #[test]
    fn test_blank_submission_is_ignored() {
        let mut list = list();
        add(&mut list, "Keep me");

        for blank in ["", "   ", "\t\n"] {
            list.set_buffer(blank);
            assert_eq!(list.submit(), None);
            assert_eq!(list.buffer(), blank);
        }
        assert_eq!(titles(&list), vec!["Keep me"]);
    }

    #[test]
    fn test_duplicate_titles_are_allowed() {
        let mut list = list();
        let a = add(&mut list, "Same");
        let b = add(&mut list, "Same");
        assert_ne!(a, b);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut list = list();
        let a = add(&mut list, "a");
        let b = add(&mut list, "b");
        let c = add(&mut list, "c");

        list.toggle(&b);
        assert!(!list.get(&a).unwrap().done);
        assert!(list.get(&b).unwrap().done);
        assert!(!list.get(&c).unwrap().done);
        assert_eq!(titles(&list), vec!["a", "b", "c"]);

        list.toggle(&b);
        assert!(!list.get(&b).unwrap().done);
        assert_eq!(list.completed_count(), 0);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = list();
        add(&mut list, "a");
        let before = list.tasks().to_vec();
        list.toggle(&TaskId::new("missing"));
        assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn test_delete_preserves_order_of_rest() {
        let mut list = list();
        add(&mut list, "a");
        let b = add(&mut list, "b");
        add(&mut list, "c");

        list.delete(&b);
        assert_eq!(titles(&list), vec!["a", "c"]);
        assert!(list.get(&b).is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut list = list();
        add(&mut list, "a");
        add(&mut list, "b");
        list.delete(&TaskId::new("missing"));
        assert_eq!(titles(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_buy_milk_lifecycle() {
        let mut list = list();
        assert!(list.is_empty());

        let id = add(&mut list, "Buy milk");
        assert_eq!(list.tasks(), &[Task::new(id.clone(), "Buy milk")]);

        list.toggle(&id);
        assert!(list.get(&id).unwrap().done);
        assert_eq!(list.completed_count(), 1);

        list.delete(&id);
        assert!(list.is_empty());
    }

    #[test]
    fn test_empty_submit_on_empty_list() {
        let mut list = list();
        list.set_buffer("");
        list.submit();
        assert!(list.is_empty());
    }
}
