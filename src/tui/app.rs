//! Main application logic for the terminal user interface.
//!
//! `App` owns the task list and the input field, turns key events into list
//! operations and draws the screen: header, input row with add button, the
//! task rows (or the empty-state message) and a status bar.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::debug;

use crate::config::Config;
use crate::list::TaskList;
use crate::tui::{
    colors::{ACCENT_BLUE, PLACEHOLDER_GRAY},
    enums::{AppState, Focus},
    input::InputField,
    row::{render_row, row_action, RowAction},
    utils::centered_rect,
};

const ADD_BUTTON: &str = "[ + ]";

/// State for the to-do screen.
pub struct App {
    state: AppState,
    focus: Focus,
    config: Config,
    list: TaskList,
    input: InputField,
    list_state: ListState,
    status_message: String,
}

impl App {
    /// Create a screen with an empty list.
    pub fn new(config: Config) -> Self {
        let list = config.new_list();
        App {
            state: AppState::TaskList,
            focus: Focus::Input,
            config,
            list,
            input: InputField::new(),
            list_state: ListState::default(),
            status_message: String::new(),
        }
    }

    /// Hand back the list, consuming the screen.
    pub fn into_list(self) -> TaskList {
        self.list
    }

    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Copy the input field into the list's buffer after an edit.
    fn sync_buffer(&mut self) {
        self.list.set_buffer(self.input.value());
    }

    /// Submit the buffer. Blank input is silently ignored.
    fn submit(&mut self) {
        self.sync_buffer();
        if let Some(id) = self.list.submit() {
            self.input.clear();
            self.list_state.select(Some(self.list.len() - 1));
            if let Some(task) = self.list.get(&id) {
                let msg = format!("Added \"{}\"", task.title);
                self.set_status_message(msg);
            }
        }
    }

    fn selected_index(&self) -> Option<usize> {
        self.list_state
            .selected()
            .filter(|&idx| idx < self.list.len())
    }

    /// Keep the selection on a valid row after the list shrinks.
    fn clamp_selection(&mut self) {
        let len = self.list.len();
        let selected = match self.list_state.selected() {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => Some(0),
        };
        self.list_state.select(selected);
        if len == 0 && self.focus == Focus::List {
            self.focus = Focus::Input;
        }
    }

    fn apply_row_action(&mut self, action: RowAction) {
        match action {
            RowAction::Toggle(id) => {
                self.list.toggle(&id);
                if let Some(task) = self.list.get(&id) {
                    let verb = if task.done { "Completed" } else { "Reopened" };
                    let msg = format!("{} \"{}\"", verb, task.title);
                    self.set_status_message(msg);
                }
            }
            RowAction::Delete(id) => {
                let title = self.list.get(&id).map(|t| t.title.clone());
                self.list.delete(&id);
                self.clamp_selection();
                if let Some(title) = title {
                    self.set_status_message(format!("Deleted \"{}\"", title));
                }
            }
        }
    }

    fn focus_list(&mut self) {
        if self.list.is_empty() {
            return;
        }
        self.focus = Focus::List;
        if self.selected_index().is_none() {
            self.list_state.select(Some(0));
        }
    }

    /// Handle keyboard input while the input field has focus.
    fn handle_input_field_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.handle_char(c);
                self.sync_buffer();
            }
            KeyCode::Backspace => {
                self.input.handle_backspace();
                self.sync_buffer();
            }
            KeyCode::Delete => {
                self.input.handle_delete();
                self.sync_buffer();
            }
            KeyCode::Left => self.input.move_cursor_left(),
            KeyCode::Right => self.input.move_cursor_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Down => self.focus_list(),
            _ => {}
        }
    }

    /// Handle keyboard input while the task rows have focus.
    fn handle_list_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => match self.selected_index() {
                Some(0) | None => self.focus = Focus::Input,
                Some(idx) => self.list_state.select(Some(idx - 1)),
            },
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(idx) = self.selected_index() {
                    if idx + 1 < self.list.len() {
                        self.list_state.select(Some(idx + 1));
                    }
                }
            }
            KeyCode::Char('a') | KeyCode::Char('i') => self.focus = Focus::Input,
            KeyCode::Char('?') => self.state = AppState::Help,
            _ => {
                let action = self
                    .selected_index()
                    .and_then(|idx| self.list.tasks().get(idx))
                    .and_then(|task| row_action(task, key));
                if let Some(action) = action {
                    self.apply_row_action(action);
                }
            }
        }
    }

    /// Handle one key event.
    ///
    /// Returns true if the application should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        self.clear_status_message();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.state == AppState::Help {
            self.state = AppState::TaskList;
            return false;
        }

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::F(1) => self.state = AppState::Help,
            KeyCode::Tab | KeyCode::BackTab => match self.focus {
                Focus::Input => self.focus_list(),
                Focus::List => self.focus = self.focus.toggled(),
            },
            code => match self.focus {
                Focus::Input => self.handle_input_field_key(code, key.modifiers),
                Focus::List => self.handle_list_key(code),
            },
        }
        false
    }

    /// Poll for and handle keyboard events.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                debug!(code = ?key.code, focus = ?self.focus, "key");
                return Ok(self.handle_key(key));
            }
        }
        Ok(false)
    }

    fn border_style(&self, focus: Focus) -> Style {
        if self.focus == focus {
            Style::default().fg(ACCENT_BLUE)
        } else {
            Style::default()
        }
    }

    fn render_header(&mut self, f: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(Span::styled(
            self.config.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render the text field and the add button beside it.
    fn render_input_row(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(ADD_BUTTON.len() as u16 + 2)])
            .split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style(Focus::Input))
            .title("New task");
        let inner = block.inner(chunks[0]);

        let text = if self.input.is_empty() {
            Line::from(Span::styled(
                self.config.placeholder.clone(),
                Style::default().fg(PLACEHOLDER_GRAY).add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(self.input.value().to_string())
        };

        // Scroll horizontally so the cursor stays visible.
        let width = inner.width.max(1) as usize;
        let column = self.input.cursor_column();
        let scroll = column.saturating_sub(width - 1);
        let field = Paragraph::new(text).block(block).scroll((0, scroll as u16));
        f.render_widget(field, chunks[0]);

        let button = Paragraph::new(ADD_BUTTON)
            .style(Style::default().bg(ACCENT_BLUE).fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(button, chunks[1]);

        if self.focus == Focus::Input && self.state == AppState::TaskList {
            let x = inner.x + (column - scroll) as u16;
            f.set_cursor_position((x, inner.y));
        }
    }

    /// Render the task rows, or the empty-state message.
    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style(Focus::List))
            .title(format!("Tasks ({})", self.list.len()));

        if self.list.is_empty() {
            let empty = Paragraph::new(self.config.empty_message.clone())
                .style(Style::default().fg(PLACEHOLDER_GRAY))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<_> = self.list.tasks().iter().map(render_row).collect();
        let highlight = if self.focus == Focus::List {
            Style::default().bg(Color::Gray).fg(Color::Black)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_help(&mut self, f: &mut Frame, area: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let help_text = vec![
            Line::from(Span::styled("Input field:", bold)),
            Line::from("  Type         Compose a task"),
            Line::from("  Enter        Add the task"),
            Line::from("  Tab / Down   Move to the task list"),
            Line::from(""),
            Line::from(Span::styled("Task list:", bold)),
            Line::from("  Up/k, Down/j Select a task"),
            Line::from("  Space/Enter  Toggle done"),
            Line::from("  d/Delete     Delete task"),
            Line::from("  Tab / a      Back to the input field"),
            Line::from("  ?            Show this help"),
            Line::from(""),
            Line::from("  F1           Show this help"),
            Line::from("  Esc/Ctrl+C   Quit (tasks are not saved)"),
        ];

        let area = centered_rect(60, 70, area);
        f.render_widget(Clear, area);
        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help - Press any key to return"),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            format!(
                "{} tasks, {} done | Tab switch focus | F1 help | Esc quit",
                self.list.len(),
                self.list.completed_count()
            )
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(ACCENT_BLUE).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Draw the whole screen.
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_header(f, chunks[0]);
        self.render_input_row(f, chunks[1]);
        self.render_task_list(f, chunks[2]);
        self.render_status_bar(f, chunks[3]);

        if self.state == AppState::Help {
            self.render_help(f, area);
        }
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}
