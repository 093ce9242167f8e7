//! Enumerations for TUI state management.

/// Which overlay, if any, is showing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppState {
    TaskList,
    Help,
}

/// Which part of the screen receives key input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    Input,
    List,
}

impl Focus {
    /// The other focus target.
    pub fn toggled(self) -> Self {
        match self {
            Focus::Input => Focus::List,
            Focus::List => Focus::Input,
        }
    }
}
