//! Configuration types for stressmark

use std::time::Duration;

use serde::{Deserialize, Serialize};
use stressmark_core::WhitespaceMarker;

/// Default stress-analysis service location
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub render: RenderSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Request timeout as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.server.timeout_ms)
    }
}

/// Stress-analysis service settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL; the endpoint path is appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Render transform settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderSettings {
    /// Marker substituted for spaces inside tokens
    #[serde(default)]
    pub marker: WhitespaceMarker,
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Show a failure indicator when a request fails.
    /// When false, failures are only logged.
    #[serde(default = "default_true")]
    pub show_errors: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { show_errors: true }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Drawn between the tokens of a word; empty draws them adjacent
    #[serde(default = "default_token_separator")]
    pub token_separator: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            token_separator: default_token_separator(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_true() -> bool {
    true
}

fn default_token_separator() -> String {
    "·".to_string()
}
