//! Multi-line text input widget

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use stressmark_app::input::InputState;

use crate::theme::styles;

const PLACEHOLDER: &str = "Type text, then Ctrl+S to analyse";

/// Bordered editor for the submission text
pub struct TextInput<'a> {
    input: &'a InputState,
    focused: bool,
}

impl<'a> TextInput<'a> {
    pub fn new(input: &'a InputState) -> Self {
        Self {
            input,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Screen position of the cursor inside `area`, if it fits
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let inner = styles::glass_block(self.focused).inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }

        let (row, _) = self.input.cursor_row_col();
        let (scroll_y, scroll_x) = self.scroll(inner);
        let col = self.prefix_width() - scroll_x as usize;

        Some(Position::new(
            inner.x + col as u16,
            inner.y + (row - scroll_y as usize) as u16,
        ))
    }

    /// Display width of the text left of the cursor on its line
    fn prefix_width(&self) -> usize {
        self.input.current_line_prefix().width()
    }

    /// (vertical, horizontal) scroll keeping the cursor visible
    fn scroll(&self, inner: Rect) -> (u16, u16) {
        let (row, _) = self.input.cursor_row_col();
        let y = row.saturating_sub(inner.height.saturating_sub(1) as usize);
        let x = self
            .prefix_width()
            .saturating_sub(inner.width.saturating_sub(1) as usize);
        (y as u16, x as u16)
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.focused { " Text * " } else { " Text " };
        let block = styles::glass_block(self.focused).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.input.is_empty() && !self.focused {
            Paragraph::new(Span::styled(PLACEHOLDER, styles::text_muted())).render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .input
            .text()
            .split('\n')
            .map(|l| Line::from(Span::styled(l, styles::text_primary())))
            .collect();

        Paragraph::new(lines)
            .scroll(self.scroll(inner))
            .render(inner, buf);
    }
}
