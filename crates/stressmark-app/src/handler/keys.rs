//! Key event handlers for each focus region

use crate::input_key::InputKey;
use crate::message::{InputEdit, Message};
use crate::state::{AppState, Focus};

/// Convert key events to messages based on the focused region
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(key) {
        return Some(msg);
    }

    match state.focus {
        Focus::Input => handle_key_input(key),
        Focus::Results => handle_key_results(state, key),
    }
}

/// Bindings that work regardless of focus
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('q') => Some(Message::RequestQuit),
        InputKey::CharCtrl('s') | InputKey::F(5) => Some(Message::Submit),
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),
        _ => None,
    }
}

/// Handle key events while editing the input
fn handle_key_input(key: InputKey) -> Option<Message> {
    let edit = match key {
        InputKey::Char(c) => InputEdit::Insert(c),
        InputKey::Enter => InputEdit::Newline,
        InputKey::Backspace => InputEdit::Backspace,
        InputKey::Delete => InputEdit::Delete,
        InputKey::Left => InputEdit::Left,
        InputKey::Right => InputEdit::Right,
        InputKey::Up => InputEdit::Up,
        InputKey::Down => InputEdit::Down,
        InputKey::Home => InputEdit::Home,
        InputKey::End => InputEdit::End,
        InputKey::CharCtrl('u') => InputEdit::Clear,

        // Leave the input without quitting
        InputKey::Esc => return Some(Message::ToggleFocus),

        _ => return None,
    };
    Some(Message::Input(edit))
}

/// Handle key events while browsing results
fn handle_key_results(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),

        // Back to editing
        InputKey::Char('i') | InputKey::Enter => Some(Message::ToggleFocus),

        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),

        InputKey::Char('x') if state.submissions.last_failure.is_some() => {
            Some(Message::DismissError)
        }

        _ => None,
    }
}
