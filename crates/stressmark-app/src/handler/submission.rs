//! Submission handlers: input capture, response rendering, failure policy

use tracing::{debug, info, warn};

use super::{UpdateAction, UpdateResult};
use crate::message::RequestId;
use crate::state::{AppState, FailureNotice};
use stressmark_core::{render_result, RequestFailure, StressResult, SubmissionRequest};

/// Read the input once and start exactly one request with it
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let request = SubmissionRequest::new(state.input.text());
    let request_id = state.submissions.begin();

    info!(
        "Submitting {} ({} chars, {} in flight)",
        request_id,
        request.text.chars().count(),
        state.submissions.in_flight()
    );

    UpdateResult::action(UpdateAction::SubmitText {
        request_id,
        request,
    })
}

/// Render the response and replace whatever was displayed
pub fn handle_stress_received(
    state: &mut AppState,
    request_id: RequestId,
    result: StressResult,
) -> UpdateResult {
    state.submissions.finish();

    let rendered = render_result(&result, state.settings.render.marker);
    debug!(
        "Response for {}: {} lines, {} tokens",
        request_id,
        result.len(),
        result.token_count()
    );

    state.results.replace(rendered, request_id);
    state.result_view.scroll_to_top();
    state.submissions.last_failure = None;

    UpdateResult::none()
}

/// Leave the displayed result untouched; optionally surface an indicator
pub fn handle_stress_request_failed(
    state: &mut AppState,
    request_id: RequestId,
    failure: RequestFailure,
    message: &str,
) -> UpdateResult {
    state.submissions.finish();
    warn!("Request {} failed ({}): {}", request_id, failure, message);

    if state.settings.behavior.show_errors {
        state.submissions.last_failure = Some(FailureNotice {
            request_id,
            failure,
        });
    }

    UpdateResult::none()
}
