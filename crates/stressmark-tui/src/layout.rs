//! Screen layout definitions for the TUI
//!
//! The input box grows with its content up to a cap; results take the rest.

use ratatui::layout::{Constraint, Layout, Rect};

/// Most text rows the input box shows before it scrolls
pub const MAX_INPUT_ROWS: u16 = 8;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar with the service URL
    pub header: Rect,

    /// Multi-line text input
    pub input: Rect,

    /// Rendered stress result
    pub results: Rect,

    /// Key hints and request status
    pub status: Rect,
}

/// Create the main screen layout for an input with `input_lines` lines
pub fn create(area: Rect, input_lines: usize) -> ScreenAreas {
    let rows = input_lines.clamp(1, MAX_INPUT_ROWS as usize) as u16;

    let chunks = Layout::vertical([
        Constraint::Length(3),        // Header (bordered, one row)
        Constraint::Length(rows + 2), // Input (bordered)
        Constraint::Min(3),           // Results (bordered)
        Constraint::Length(1),        // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        input: chunks[1],
        results: chunks[2],
        status: chunks[3],
    }
}
