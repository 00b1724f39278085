//! Header bar widget
//!
//! App title, the service being queried, and the number of submissions.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Main header showing app title and service URL
pub struct MainHeader<'a> {
    service_url: &'a str,
    submitted: u64,
}

impl<'a> MainHeader<'a> {
    pub fn new(service_url: &'a str) -> Self {
        Self {
            service_url,
            submitted: 0,
        }
    }

    /// Show how many submissions were made this session
    pub fn with_submitted(mut self, submitted: u64) -> Self {
        self.submitted = submitted;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled("stressmark", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.service_url, styles::text_secondary()),
        ]);
        Paragraph::new(left).render(inner, buf);

        if self.submitted > 0 {
            let right = Line::from(Span::styled(
                format!("{} sent ", self.submitted),
                styles::text_muted(),
            ));
            let width = (right.width() as u16).min(inner.width);
            let right_area = Rect {
                x: inner.right() - width,
                width,
                ..inner
            };
            Paragraph::new(right).render(right_area, buf);
        }
    }
}
