//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::message::{Message, RequestId};
use crate::UpdateAction;
use stressmark_client::StressService;
use stressmark_core::{RequestFailure, SubmissionRequest};

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, service: Arc<S>)
where
    S: StressService + Send + Sync + 'static,
{
    match action {
        UpdateAction::SubmitText {
            request_id,
            request,
        } => {
            tokio::spawn(async move {
                execute_submission(request_id, request, msg_tx, service).await;
            });
        }
    }
}

/// Run one submission and report its outcome back to the event loop
pub async fn execute_submission<S>(
    request_id: RequestId,
    request: SubmissionRequest,
    msg_tx: mpsc::Sender<Message>,
    service: Arc<S>,
) where
    S: StressService + Send + Sync + 'static,
{
    let msg = match service.get_stress(&request).await {
        Ok(result) => {
            debug!("Request {} succeeded", request_id);
            Message::StressReceived { request_id, result }
        }
        Err(e) => Message::StressRequestFailed {
            request_id,
            failure: e
                .request_failure()
                .cloned()
                .unwrap_or(RequestFailure::Transport),
            message: e.to_string(),
        },
    };

    if msg_tx.send(msg).await.is_err() {
        // Event loop is gone; nobody is left to display the outcome
        warn!("Dropping outcome of request {}: channel closed", request_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stressmark_client::test_utils::FakeStressService;
    use stressmark_core::stress::nested;

    #[tokio::test]
    async fn test_success_sends_stress_received() {
        let service = FakeStressService::new();
        service.push_ok(nested(&[&[&["ok"]]]));
        let (tx, mut rx) = mpsc::channel(4);

        execute_submission(
            RequestId(1),
            SubmissionRequest::new("ok"),
            tx,
            Arc::new(service.clone()),
        )
        .await;

        match rx.recv().await {
            Some(Message::StressReceived { request_id, result }) => {
                assert_eq!(request_id, RequestId(1));
                assert_eq!(result, nested(&[&[&["ok"]]]));
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(service.requests(), vec![SubmissionRequest::new("ok")]);
    }

    #[tokio::test]
    async fn test_failure_carries_kind() {
        let service = FakeStressService::new();
        service.push_fail(RequestFailure::Status(503));
        let (tx, mut rx) = mpsc::channel(4);

        execute_submission(RequestId(2), SubmissionRequest::new(""), tx, Arc::new(service)).await;

        match rx.recv().await {
            Some(Message::StressRequestFailed {
                request_id,
                failure,
                message,
            }) => {
                assert_eq!(request_id, RequestId(2));
                assert_eq!(failure, RequestFailure::Status(503));
                assert!(message.contains("HTTP 503"));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_handle_action_spawns_request() {
        let service = FakeStressService::new();
        service.push_ok(nested(&[]));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::SubmitText {
                request_id: RequestId(5),
                request: SubmissionRequest::new("x"),
            },
            tx,
            Arc::new(service),
        );

        let msg = tokio::time::timeout(std::time::Duration::from_secs(1), rx.recv())
            .await
            .expect("timed out");
        assert!(matches!(
            msg,
            Some(Message::StressReceived {
                request_id: RequestId(5),
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_closed_channel_is_not_fatal() {
        let service = FakeStressService::new();
        service.push_ok(nested(&[&[&["x"]]]));
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        execute_submission(RequestId(1), SubmissionRequest::new("x"), tx, Arc::new(service)).await;
    }
}
