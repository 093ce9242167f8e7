//! Single-line text input with a cursor.

use unicode_width::UnicodeWidthChar;

/// A text input field. `cursor` counts characters, not bytes.
#[derive(Clone, Default)]
pub struct InputField {
    value: String,
    cursor: usize,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in characters from the start.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Terminal columns occupied by the text before the cursor.
    pub fn cursor_column(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Empty the field and reset the cursor.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputField {
        let mut field = InputField::new();
        text.chars().for_each(|c| field.handle_char(c));
        field
    }

    #[test]
    fn test_insert_in_middle() {
        let mut field = typed("milk");
        field.move_home();
        "buy ".chars().for_each(|c| field.handle_char(c));
        assert_eq!(field.value(), "buy milk");
        assert_eq!(field.cursor(), 4);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = typed("café ☕");
        assert_eq!(field.cursor(), 6);
        field.handle_backspace();
        assert_eq!(field.value(), "café ");
        field.move_cursor_left();
        field.move_cursor_left();
        field.handle_delete();
        assert_eq!(field.value(), "caf ");
        field.handle_char('e');
        assert_eq!(field.value(), "cafe ");
    }

    #[test]
    fn test_cursor_column_counts_wide_chars() {
        let mut field = typed("a☕b");
        assert_eq!(field.cursor(), 3);
        assert_eq!(field.cursor_column(), 4);
        field.move_cursor_left();
        assert_eq!(field.cursor_column(), 3);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut field = typed("ab");
        field.move_cursor_right();
        assert_eq!(field.cursor(), 2);
        field.handle_delete();
        assert_eq!(field.value(), "ab");
        field.move_home();
        field.move_cursor_left();
        field.handle_backspace();
        assert_eq!(field.value(), "ab");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_clear() {
        let mut field = typed("xyz");
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.cursor(), 0);
    }
}
