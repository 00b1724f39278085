//! Result view state - vertical scroll position and viewport bounds.
//!
//! Shared by the handler layer (scroll commands) and the TUI layer (which
//! reports content and viewport size on every render).

/// Largest offset a ratatui `Paragraph` can scroll to
pub const MAX_SCROLL_OFFSET: usize = u16::MAX as usize;

/// Scroll state for the results region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultViewState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Total number of rendered lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl ResultViewState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> usize {
        self.total_lines
            .saturating_sub(self.visible_lines)
            .min(MAX_SCROLL_OFFSET)
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = self.offset.saturating_add(n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Update with new content size, clamping the offset if content shrank
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(total: usize, visible: usize) -> ResultViewState {
        let mut state = ResultViewState::new();
        state.update_content_size(total, visible);
        state
    }

    #[test]
    fn test_scroll_down_clamps_to_bottom() {
        let mut state = sized(30, 10);
        state.scroll_down(100);
        assert_eq!(state.offset, 20);
    }

    #[test]
    fn test_offset_capped_for_very_long_results() {
        let mut state = sized(100_000, 10);
        state.scroll_to_bottom();
        assert_eq!(state.offset, MAX_SCROLL_OFFSET);

        state.scroll_down(usize::MAX);
        assert_eq!(state.offset, MAX_SCROLL_OFFSET);
    }

    #[test]
    fn test_scroll_up_saturates() {
        let mut state = sized(30, 10);
        state.scroll_down(3);
        state.scroll_up(10);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_page_down_and_up() {
        let mut state = sized(100, 12);
        state.page_down();
        assert_eq!(state.offset, 10);
        state.page_up();
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_content_fits_no_scroll() {
        let mut state = sized(5, 10);
        state.scroll_down(1);
        assert_eq!(state.offset, 0);
        state.scroll_to_bottom();
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_shrinking_content_clamps_offset() {
        let mut state = sized(50, 10);
        state.scroll_to_bottom();
        assert_eq!(state.offset, 40);
        state.update_content_size(12, 10);
        assert_eq!(state.offset, 2);
    }
}
