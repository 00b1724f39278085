//! Multi-line text input buffer
//!
//! Holds the text the user will submit. The cursor is a byte index that is
//! always on a char boundary. Nothing here trims or validates: what is in the
//! buffer at submit time is what gets sent.

/// Editable text with a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    text: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text, verbatim
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor byte offset into [`Self::text`]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole buffer and put the cursor at the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Move to the start of the current line
    pub fn move_home(&mut self) {
        self.cursor = self.line_start();
    }

    /// Move to the end of the current line
    pub fn move_end(&mut self) {
        self.cursor = self.line_end();
    }

    /// Move to the previous line, keeping the column where possible
    pub fn move_up(&mut self) {
        let start = self.line_start();
        if start == 0 {
            return;
        }
        let column = self.column();
        let prev_end = start - 1;
        let prev_start = self.text[..prev_end].rfind('\n').map_or(0, |i| i + 1);
        self.cursor = prev_start + byte_offset_of_column(&self.text[prev_start..prev_end], column);
    }

    /// Move to the next line, keeping the column where possible
    pub fn move_down(&mut self) {
        let end = self.line_end();
        if end == self.text.len() {
            return;
        }
        let column = self.column();
        let next_start = end + 1;
        let next_end = self.text[next_start..]
            .find('\n')
            .map_or(self.text.len(), |i| next_start + i);
        self.cursor = next_start + byte_offset_of_column(&self.text[next_start..next_end], column);
    }

    /// Zero-based (row, column) of the cursor, column counted in chars
    pub fn cursor_row_col(&self) -> (usize, usize) {
        let row = self.text[..self.cursor].matches('\n').count();
        (row, self.column())
    }

    /// Text between the start of the cursor's line and the cursor
    pub fn current_line_prefix(&self) -> &str {
        &self.text[self.line_start()..self.cursor]
    }

    /// Number of lines; an empty buffer has one (empty) line
    pub fn line_count(&self) -> usize {
        self.text.matches('\n').count() + 1
    }

    fn column(&self) -> usize {
        self.current_line_prefix().chars().count()
    }

    fn line_start(&self) -> usize {
        self.text[..self.cursor].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self) -> usize {
        self.text[self.cursor..]
            .find('\n')
            .map_or(self.text.len(), |i| self.cursor + i)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}

fn byte_offset_of_column(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(i, _)| i)
}
