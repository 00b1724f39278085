//! Main TUI runner - terminal lifecycle and event loop

use stressmark_app::Engine;
use stressmark_client::StressService;
use stressmark_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits
pub async fn run<S>(mut engine: Engine<S>) -> Result<()>
where
    S: StressService + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    engine.spawn_signal_handler();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    info!("TUI started");

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    let restored = ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()));

    result.and(restored)
}

/// Main event loop
///
/// Polling blocks for at most one tick, so background responses are picked
/// up within a frame.
fn run_loop<S>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<S>) -> Result<()>
where
    S: StressService + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Responses from submission tasks, signal handler
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
