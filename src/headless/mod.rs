//! Headless mode - JSON event output for scripting
//!
//! Performs one submission without the TUI and reports it on stdout as NDJSON
//! (newline-delimited JSON), one event per line. Each event has an "event"
//! field indicating its type, along with event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"submitted","request_id":1,"chars":3,"timestamp":1704700001000}
//! {"event":"result","request_id":1,"lines":[[["a b"]]],"timestamp":1704700001042}
//! ```

pub mod runner;

pub use runner::{run_headless, OutputFormat};

use chrono::Utc;
use serde::Serialize;
use std::io::Write;
use stressmark_core::{RenderedResult, RequestFailure, Result};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Input was read and a request started
    Submitted {
        request_id: u64,
        chars: usize,
        timestamp: i64,
    },

    /// The service answered; the payload is the rendered result
    Result {
        request_id: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        lines: Option<RenderedResult>,
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<Vec<String>>,
        timestamp: i64,
    },

    /// The request produced no result
    RequestFailed {
        request_id: u64,
        kind: String,
        message: String,
        timestamp: i64,
    },

    /// Error outside a request
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn submitted(request_id: u64, chars: usize) -> Self {
        Self::Submitted {
            request_id,
            chars,
            timestamp: Self::now(),
        }
    }

    pub fn result_lines(request_id: u64, lines: RenderedResult) -> Self {
        Self::Result {
            request_id,
            lines: Some(lines),
            text: None,
            timestamp: Self::now(),
        }
    }

    pub fn result_text(request_id: u64, text: Vec<String>) -> Self {
        Self::Result {
            request_id,
            lines: None,
            text: Some(text),
            timestamp: Self::now(),
        }
    }

    pub fn request_failed(request_id: u64, failure: &RequestFailure, message: String) -> Self {
        Self::RequestFailed {
            request_id,
            kind: failure.to_string(),
            message,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
