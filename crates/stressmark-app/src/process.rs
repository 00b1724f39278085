//! Message processing
//!
//! Runs the TEA update loop for one incoming message and dispatches any
//! resulting actions.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use stressmark_client::StressService;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    service: &Arc<S>,
) where
    S: StressService + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), service.clone());
        }

        msg = result.message;
    }
}
