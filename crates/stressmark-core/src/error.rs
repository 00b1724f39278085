//! Application error types with rich context

use std::fmt;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Why a stress request failed.
///
/// All variants belong to the same failure class: the request produced no
/// usable result and the displayed result must stay as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// Connection refused, DNS failure, reset, etc.
    Transport,
    /// No response within the configured timeout
    Timeout,
    /// Server answered with a non-success status code
    Status(u16),
    /// Success status, but the body was not a stress response
    Decode,
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestFailure::Transport => write!(f, "transport error"),
            RequestFailure::Timeout => write!(f, "timed out"),
            RequestFailure::Status(code) => write!(f, "HTTP {code}"),
            RequestFailure::Decode => write!(f, "invalid response body"),
        }
    }
}

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to restore terminal: {0}")]
    TerminalRestore(String),

    // ─────────────────────────────────────────────────────────────
    // Stress Service Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Stress request failed ({kind}): {message}")]
    Request {
        kind: RequestFailure,
        message: String,
    },

    #[error("Invalid service URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn request(kind: RequestFailure, message: impl Into<String>) -> Self {
        Self::Request {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The request failure kind, if this is a request error
    pub fn request_failure(&self) -> Option<&RequestFailure> {
        match self {
            Error::Request { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
