//! Message types for the application (TEA pattern)

use std::fmt;

use crate::input_key::InputKey;
use stressmark_core::{RequestFailure, StressResult};

/// Monotonic identifier of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Edit operation on the input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Clear,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit
    RequestQuit,

    /// Force quit (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Input Messages
    // ─────────────────────────────────────────────────────────
    /// Edit the input buffer
    Input(InputEdit),
    /// Replace the whole input buffer
    SetInput { text: String },
    /// Switch focus between input and results
    ToggleFocus,

    // ─────────────────────────────────────────────────────────
    // Submission Messages
    // ─────────────────────────────────────────────────────────
    /// Send the current input to the stress-analysis service
    Submit,
    /// The service answered a submission
    StressReceived {
        request_id: RequestId,
        result: StressResult,
    },
    /// A submission produced no result
    StressRequestFailed {
        request_id: RequestId,
        failure: RequestFailure,
        message: String,
    },
    /// Hide the failure indicator
    DismissError,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll results up one line
    ScrollUp,
    /// Scroll results down one line
    ScrollDown,
    /// Scroll to top of results
    ScrollToTop,
    /// Scroll to bottom of results
    ScrollToBottom,
    /// Page up in results
    PageUp,
    /// Page down in results
    PageDown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_display_and_order() {
        assert_eq!(RequestId(7).to_string(), "#7");
        assert!(RequestId(1) < RequestId(2));
    }
}
