//! Status bar widget
//!
//! Request activity, the failure indicator, and key hints for the focused
//! region.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use stressmark_app::state::{AppState, Focus};

use crate::theme::styles;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Status bar showing request activity and key hints
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Spinner with in-flight count, or an idle dot
    fn activity(&self) -> Vec<Span<'static>> {
        let in_flight = self.state.submissions.in_flight();
        if in_flight > 0 {
            let frame = SPINNER[(self.state.tick % SPINNER.len() as u64) as usize];
            vec![Span::styled(
                format!("{} {} in flight", frame, in_flight),
                styles::status_yellow(),
            )]
        } else {
            vec![Span::styled("● ready", styles::status_green())]
        }
    }

    fn failure(&self) -> Option<Vec<Span<'static>>> {
        let notice = self.state.submissions.last_failure.as_ref()?;
        Some(vec![
            Span::styled(format!("✗ {}", notice.label()), styles::status_red()),
            Span::styled(" [", styles::text_muted()),
            Span::styled("x", styles::keybinding()),
            Span::styled("]", styles::text_muted()),
        ])
    }

    fn hints(&self) -> Vec<Span<'static>> {
        let pairs: &[(&'static str, &'static str)] = match self.state.focus {
            Focus::Input => &[("^S", "submit"), ("Tab", "results"), ("^Q", "quit")],
            Focus::Results => &[("↑↓", "scroll"), ("i", "edit"), ("q", "quit")],
        };

        let mut spans = Vec::new();
        for (key, label) in pairs {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", label), styles::text_muted()));
        }
        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut left = vec![Span::raw(" ")];
        left.extend(self.activity());
        if let Some(failure) = self.failure() {
            left.push(Span::raw("  "));
            left.extend(failure);
        }
        let left = Line::from(left);
        let right = Line::from(self.hints());

        // Hints give way to status when the row is too narrow for both
        let fits = left.width() + right.width() <= area.width as usize;
        Paragraph::new(left).render(area, buf);

        if fits {
            let width = right.width() as u16;
            let right_area = Rect {
                x: area.right() - width,
                width,
                ..area
            };
            Paragraph::new(right).render(right_area, buf);
        }
    }
}
