//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::input::InputState;
use crate::message::RequestId;
use crate::result_view_state::ResultViewState;
use stressmark_core::{RenderedResult, RequestFailure};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which region receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Results,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Input => Focus::Results,
            Focus::Results => Focus::Input,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Result Slot
// ─────────────────────────────────────────────────────────────────────────────

/// The single displayed-result slot.
///
/// Empty until the first successful response. [`ResultSlot::replace`] swaps the
/// whole content; nothing is merged and no history is kept.
#[derive(Debug, Clone, Default)]
pub struct ResultSlot {
    current: Option<RenderedResult>,
    /// Incremented on every replace
    generation: u64,
    /// Submission whose response is currently shown
    source: Option<RequestId>,
}

impl ResultSlot {
    pub fn get(&self) -> Option<&RenderedResult> {
        self.current.as_ref()
    }

    pub fn replace(&mut self, result: RenderedResult, source: RequestId) {
        self.current = Some(result);
        self.source = Some(source);
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn source(&self) -> Option<RequestId> {
        self.source
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Submission Tracking
// ─────────────────────────────────────────────────────────────────────────────

/// A failed request, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureNotice {
    pub request_id: RequestId,
    pub failure: RequestFailure,
}

impl FailureNotice {
    /// Short generic label for the status bar
    pub fn label(&self) -> String {
        format!("Request {} failed ({})", self.request_id, self.failure)
    }
}

/// Submission bookkeeping.
///
/// Only counts; responses are applied in arrival order whatever their id.
#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    next_id: u64,
    in_flight: usize,
    /// Most recent failure, if the indicator is enabled
    pub last_failure: Option<FailureNotice>,
}

impl SubmissionTracker {
    /// Allocate an id for a new submission and count it as in flight
    pub fn begin(&mut self) -> RequestId {
        self.next_id += 1;
        self.in_flight += 1;
        RequestId(self.next_id)
    }

    /// Mark one submission as settled
    pub fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Number of submissions started so far
    pub fn submitted(&self) -> u64 {
        self.next_id
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// Complete application state (the Model in TEA)
#[derive(Debug, Default)]
pub struct AppState {
    pub phase: AppPhase,

    pub focus: Focus,

    /// Text the user will submit
    pub input: InputState,

    /// The displayed result
    pub results: ResultSlot,

    /// Scroll position of the results region
    pub result_view: ResultViewState,

    pub submissions: SubmissionTracker,

    pub settings: Settings,

    /// Tick counter for the in-flight spinner
    pub tick: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Service base URL, for display
    pub fn service_url(&self) -> &str {
        &self.settings.server.base_url
    }
}
