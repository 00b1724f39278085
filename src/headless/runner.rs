//! Headless mode runner - one submission without the TUI
//!
//! Drives the same Engine as the TUI: the text is placed in the input, a
//! submit is processed, and the loop waits until the request settles.

use std::io::Write;

use tracing::{info, warn};

use stressmark_app::{message::Message, state::AppState, Engine};
use stressmark_client::StressService;
use stressmark_core::prelude::*;

use super::HeadlessEvent;

/// Result payload of the `result` event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Nested line/word/token array
    #[default]
    Json,
    /// One display string per line
    Text,
}

/// Run one submission and print NDJSON events to stdout.
///
/// Returns `Ok(false)` when the request failed.
pub async fn run_headless<S>(engine: Engine<S>, text: String, format: OutputFormat) -> Result<bool>
where
    S: StressService + Send + Sync + 'static,
{
    run_headless_with_output(engine, text, format, std::io::stdout()).await
}

/// Like [`run_headless`], writing events to `out`
pub async fn run_headless_with_output<S, W>(
    mut engine: Engine<S>,
    text: String,
    format: OutputFormat,
    mut out: W,
) -> Result<bool>
where
    S: StressService + Send + Sync + 'static,
    W: Write,
{
    info!("stressmark starting in headless mode ({} chars)", text.len());
    engine.spawn_signal_handler();

    let chars = text.chars().count();
    engine.process_message(Message::SetInput { text });
    engine.process_message(Message::Submit);
    HeadlessEvent::submitted(engine.state.submissions.submitted(), chars).write_to(&mut out)?;

    let mut succeeded = false;
    while engine.state.submissions.is_busy() && !engine.should_quit() {
        let Some(msg) = engine.next_message().await else {
            warn!("Message channel closed");
            break;
        };

        let generation = engine.state.results.generation();
        emit_pre_message_events(&msg, &mut out)?;
        engine.process_message(msg);

        if engine.state.results.generation() != generation {
            emit_result(&engine.state, format, &mut out)?;
            succeeded = true;
        }
    }

    if engine.should_quit() && engine.state.submissions.is_busy() {
        HeadlessEvent::error("Interrupted before the request settled".to_string(), true)
            .write_to(&mut out)?;
    }

    engine.shutdown();
    info!("stressmark headless mode exiting");
    Ok(succeeded)
}

/// Failures are reported whatever the `show_errors` setting says
fn emit_pre_message_events<W: Write>(msg: &Message, out: &mut W) -> Result<()> {
    if let Message::StressRequestFailed {
        request_id,
        failure,
        message,
    } = msg
    {
        HeadlessEvent::request_failed(request_id.0, failure, message.clone()).write_to(out)?;
    }
    Ok(())
}

/// Emit the result that was just placed in the slot
fn emit_result<W: Write>(state: &AppState, format: OutputFormat, out: &mut W) -> Result<()> {
    let (Some(rendered), Some(source)) = (state.results.get(), state.results.source()) else {
        return Ok(());
    };

    let event = match format {
        OutputFormat::Json => HeadlessEvent::result_lines(source.0, rendered.clone()),
        OutputFormat::Text => HeadlessEvent::result_text(source.0, rendered.to_plain_lines()),
    };
    event.write_to(out)?;
    Ok(())
}
