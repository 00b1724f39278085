//! Engine - shared orchestration state for TUI and headless runners
//!
//! Owns the TEA state, the unified message channel, and the service handle
//! that background submissions run against.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use stressmark_client::StressService;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for stressmark.
///
/// Encapsulates everything the TUI and headless runners share:
/// the Model, the message channel, and the stress-analysis service.
pub struct Engine<S> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, submissions).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    service: Arc<S>,
}

impl<S> Engine<S>
where
    S: StressService + Send + Sync + 'static,
{
    /// Create a new Engine with loaded settings and a service client.
    ///
    /// Does not install OS signal handlers; runners call
    /// [`Engine::spawn_signal_handler`] when they want them.
    pub fn new(settings: Settings, service: S) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        info!("Engine ready (service: {})", settings.server.base_url);

        Self {
            state: AppState::with_settings(settings),
            msg_tx,
            msg_rx,
            service: Arc::new(service),
        }
    }

    /// Route SIGINT/SIGTERM into a [`Message::Quit`]
    pub fn spawn_signal_handler(&self) {
        signals::spawn_signal_handler(self.msg_tx.clone());
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.service);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        if count > 0 {
            debug!("Drained {} pending messages", count);
        }
        count
    }

    /// Wait for the next message from background tasks.
    ///
    /// Never returns `None` while the engine is alive, since it holds a sender.
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Log what is being abandoned on exit
    pub fn shutdown(&self) {
        let in_flight = self.state.submissions.in_flight();
        if in_flight > 0 {
            info!("Shutting down with {} request(s) in flight", in_flight);
        } else {
            info!("Shutting down");
        }
    }
}
