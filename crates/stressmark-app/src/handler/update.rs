//! Main update function - handles state transitions (TEA pattern)

use crate::message::{InputEdit, Message};
use crate::state::{AppPhase, AppState, Focus};

use super::{keys::handle_key, submission, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit | Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.submissions.is_busy() {
                state.tick = state.tick.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Input Messages
        // ─────────────────────────────────────────────────────────
        Message::Input(edit) => {
            apply_edit(state, edit);
            UpdateResult::none()
        }

        Message::SetInput { text } => {
            state.input.set_text(text);
            UpdateResult::none()
        }

        Message::ToggleFocus => {
            state.focus = state.focus.toggled();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Submission Messages
        // ─────────────────────────────────────────────────────────
        Message::Submit => submission::handle_submit(state),

        Message::StressReceived { request_id, result } => {
            submission::handle_stress_received(state, request_id, result)
        }

        Message::StressRequestFailed {
            request_id,
            failure,
            message,
        } => submission::handle_stress_request_failed(state, request_id, failure, &message),

        Message::DismissError => {
            state.submissions.last_failure = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            state.result_view.scroll_up(1);
            UpdateResult::none()
        }
        Message::ScrollDown => {
            state.result_view.scroll_down(1);
            UpdateResult::none()
        }
        Message::ScrollToTop => {
            state.result_view.scroll_to_top();
            UpdateResult::none()
        }
        Message::ScrollToBottom => {
            state.result_view.scroll_to_bottom();
            UpdateResult::none()
        }
        Message::PageUp => {
            state.result_view.page_up();
            UpdateResult::none()
        }
        Message::PageDown => {
            state.result_view.page_down();
            UpdateResult::none()
        }
    }
}

fn apply_edit(state: &mut AppState, edit: InputEdit) {
    // Edits only land while the input has focus
    if state.focus != Focus::Input {
        return;
    }

    let input = &mut state.input;
    match edit {
        InputEdit::Insert(c) => input.insert_char(c),
        InputEdit::Newline => input.insert_newline(),
        InputEdit::Backspace => input.backspace(),
        InputEdit::Delete => input.delete(),
        InputEdit::Left => input.move_left(),
        InputEdit::Right => input.move_right(),
        InputEdit::Up => input.move_up(),
        InputEdit::Down => input.move_down(),
        InputEdit::Home => input.move_home(),
        InputEdit::End => input.move_end(),
        InputEdit::Clear => input.clear(),
    }
}
