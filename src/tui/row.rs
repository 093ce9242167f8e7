//! Stateless rendering of a single task row.
//!
//! A row shows a completion box, the title (crossed out once done) and a
//! delete marker. Key presses on a row map to a `RowAction` which the
//! screen applies to the list.

use crossterm::event::KeyCode;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::task::{Task, TaskId};
use crate::tui::colors::{CHECK_GREEN, DELETE_RED, DONE_GRAY};

/// What interacting with a row asks the list to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Toggle(TaskId),
    Delete(TaskId),
}

/// Map a key pressed on `task`'s row to an action.
pub fn row_action(task: &Task, key: KeyCode) -> Option<RowAction> {
    match key {
        KeyCode::Char(' ') | KeyCode::Enter => Some(RowAction::Toggle(task.id.clone())),
        KeyCode::Char('d') | KeyCode::Delete => Some(RowAction::Delete(task.id.clone())),
        _ => None,
    }
}

/// Completion indicator for `done`.
pub fn checkbox(done: bool) -> &'static str {
    if done {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Title style: dimmed and crossed out once done.
pub fn title_style(done: bool) -> Style {
    if done {
        Style::default().fg(DONE_GRAY).add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    }
}

/// Build the list item for `task`.
pub fn render_row(task: &Task) -> ListItem<'static> {
    let check_style = Style::default().fg(CHECK_GREEN).add_modifier(Modifier::BOLD);

    ListItem::new(Line::from(vec![
        Span::styled(checkbox(task.done), check_style),
        Span::raw(" "),
        Span::styled(task.title.clone(), title_style(task.done)),
        Span::raw("  "),
        Span::styled("[del]", Style::default().fg(DELETE_RED)),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(done: bool) -> Task {
        Task {
            id: TaskId::new("7"),
            title: "Buy milk".to_string(),
            done,
        }
    }

    #[test]
    fn test_row_action_mapping() {
        let t = task(false);
        assert_eq!(row_action(&t, KeyCode::Char(' ')), Some(RowAction::Toggle(t.id.clone())));
        assert_eq!(row_action(&t, KeyCode::Enter), Some(RowAction::Toggle(t.id.clone())));
        assert_eq!(row_action(&t, KeyCode::Char('d')), Some(RowAction::Delete(t.id.clone())));
        assert_eq!(row_action(&t, KeyCode::Delete), Some(RowAction::Delete(t.id.clone())));
        assert_eq!(row_action(&t, KeyCode::Char('q')), None);
        assert_eq!(row_action(&t, KeyCode::Up), None);
        assert_eq!(row_action(&t, KeyCode::Char('x')), None);
        assert_eq!(row_action(&t, KeyCode::Backspace), None);
    }

    #[test]
    fn test_checkbox_reflects_done() {
        assert_eq!(checkbox(false), "[ ]");
        assert_eq!(checkbox(true), "[x]");
    }

    #[test]
    fn test_done_title_is_crossed_out() {
        assert!(title_style(true).add_modifier.contains(Modifier::CROSSED_OUT));
        assert!(!title_style(false).add_modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(render_row(&task(true)).height(), 1);
    }
}
