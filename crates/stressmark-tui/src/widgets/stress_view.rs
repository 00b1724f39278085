//! Stress result view widget
//!
//! Draws one terminal row per result line. Words are separated by a space and
//! the tokens of a word by the configured separator, alternating colors so
//! token boundaries stay visible even with an empty separator.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use stressmark_app::result_view_state::ResultViewState;
use stressmark_core::RenderedResult;

use crate::theme::styles;

const EMPTY_STATE: &str = "No result yet";
const EMPTY_RESULT: &str = "(empty result)";

/// Build display lines for a rendered result
pub fn build_lines<'a>(result: &'a RenderedResult, separator: &'a str) -> Vec<Line<'a>> {
    result
        .lines()
        .iter()
        .map(|line| {
            let mut spans = Vec::new();
            for (w, word) in line.words().iter().enumerate() {
                if w > 0 {
                    spans.push(Span::raw(" "));
                }
                for (t, token) in word.tokens().iter().enumerate() {
                    if t > 0 && !separator.is_empty() {
                        spans.push(Span::styled(separator, styles::token_separator()));
                    }
                    spans.push(Span::styled(token.as_str(), styles::token(t)));
                }
            }
            Line::from(spans)
        })
        .collect()
}

/// Scrollable view of the displayed result
pub struct StressView<'a> {
    result: Option<&'a RenderedResult>,
    separator: &'a str,
    focused: bool,
}

impl<'a> StressView<'a> {
    pub fn new(result: Option<&'a RenderedResult>) -> Self {
        Self {
            result,
            separator: "",
            focused: false,
        }
    }

    /// String drawn between the tokens of a word
    pub fn separator(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl StatefulWidget for StressView<'_> {
    type State = ResultViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let lines = match self.result {
            Some(result) => build_lines(result, self.separator),
            None => Vec::new(),
        };
        let total = lines.len();

        let block = styles::glass_block(self.focused).title(" Result ");
        let inner = block.inner(area);
        state.update_content_size(total, inner.height as usize);

        let block = if total > inner.height as usize {
            let last = (state.offset + inner.height as usize).min(total);
            block.title_bottom(
                Line::from(format!(" {}-{} of {} ", state.offset + 1, last, total))
                    .right_aligned(),
            )
        } else {
            block
        };
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match self.result {
            None => Paragraph::new(Span::styled(EMPTY_STATE, styles::text_muted())).render(inner, buf),
            Some(result) if result.is_empty() => {
                Paragraph::new(Span::styled(EMPTY_RESULT, styles::text_muted())).render(inner, buf)
            }
            Some(_) => Paragraph::new(lines)
                .scroll((u16::try_from(state.offset).unwrap_or(u16::MAX), 0))
                .render(inner, buf),
        }
    }
}
