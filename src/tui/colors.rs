//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Add button and focused borders
pub const ACCENT_BLUE: Color = Color::Rgb(35, 96, 200);
/// Completion checkbox
pub const CHECK_GREEN: Color = Color::Rgb(76, 175, 80);
/// Finished task titles
pub const DONE_GRAY: Color = Color::Rgb(158, 158, 158);
/// Input placeholder
pub const PLACEHOLDER_GRAY: Color = Color::Rgb(170, 170, 170);
/// Delete marker
pub const DELETE_RED: Color = Color::Rgb(114, 0, 0);
