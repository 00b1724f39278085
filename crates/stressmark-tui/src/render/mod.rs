//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use stressmark_app::state::{AppState, Focus};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure apart from the result view state, which records the content and
/// viewport size seen during this render.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.input.line_count());

    let header = widgets::MainHeader::new(state.service_url())
        .with_submitted(state.submissions.submitted());
    frame.render_widget(header, areas.header);

    let input_focused = state.focus == Focus::Input;
    let input = widgets::TextInput::new(&state.input).focused(input_focused);
    let cursor = input.cursor_position(areas.input);
    frame.render_widget(input, areas.input);
    if input_focused {
        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }
    }

    let results = widgets::StressView::new(state.results.get())
        .separator(&state.settings.ui.token_separator)
        .focused(state.focus == Focus::Results);
    frame.render_stateful_widget(results, areas.results, &mut state.result_view);

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
