//! Test utilities for the service client
//!
//! Provides a scripted in-memory [`StressService`] so application and runner
//! tests can drive submissions without a server.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use stressmark_core::prelude::*;
use stressmark_core::{RequestFailure, StressResult, SubmissionRequest};

use crate::client::StressService;

/// Outcome of one scripted call
#[derive(Debug, Clone)]
pub enum FakeReply {
    Ok(StressResult),
    Fail(RequestFailure),
}

#[derive(Debug, Default)]
struct FakeInner {
    replies: VecDeque<(Duration, FakeReply)>,
    requests: Vec<SubmissionRequest>,
}

/// Scripted stress service.
///
/// Replies are consumed in call order. When the script runs dry every call
/// fails with [`RequestFailure::Transport`].
#[derive(Debug, Clone, Default)]
pub struct FakeStressService {
    inner: Arc<Mutex<FakeInner>>,
}

impl FakeStressService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply
    pub fn push_ok(&self, result: StressResult) -> &Self {
        self.push(Duration::ZERO, FakeReply::Ok(result))
    }

    /// Queue a failed reply
    pub fn push_fail(&self, kind: RequestFailure) -> &Self {
        self.push(Duration::ZERO, FakeReply::Fail(kind))
    }

    /// Queue a reply delivered after `delay`
    pub fn push(&self, delay: Duration, reply: FakeReply) -> &Self {
        self.lock().replies.push_back((delay, reply));
        self
    }

    /// Requests received so far, in call order
    pub fn requests(&self) -> Vec<SubmissionRequest> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl StressService for FakeStressService {
    async fn get_stress(&self, request: &SubmissionRequest) -> Result<StressResult> {
        let scripted = {
            let mut inner = self.lock();
            inner.requests.push(request.clone());
            inner.replies.pop_front()
        };

        let (delay, reply) =
            scripted.unwrap_or((Duration::ZERO, FakeReply::Fail(RequestFailure::Transport)));

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match reply {
            FakeReply::Ok(result) => Ok(result),
            FakeReply::Fail(kind) => Err(Error::request(kind, "scripted failure")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stressmark_core::stress::nested;

    #[tokio::test]
    async fn test_fake_replays_in_order() {
        let fake = FakeStressService::new();
        fake.push_ok(nested(&[&[&["one"]]]))
            .push_fail(RequestFailure::Status(500));

        let first = fake.get_stress(&SubmissionRequest::new("1")).await;
        let second = fake.get_stress(&SubmissionRequest::new("2")).await;

        assert_eq!(first.unwrap(), nested(&[&[&["one"]]]));
        assert_eq!(
            second.unwrap_err().request_failure(),
            Some(&RequestFailure::Status(500))
        );
        assert_eq!(
            fake.requests(),
            vec![SubmissionRequest::new("1"), SubmissionRequest::new("2")]
        );
    }

    #[tokio::test]
    async fn test_fake_fails_when_script_empty() {
        let fake = FakeStressService::new();
        let err = fake
            .get_stress(&SubmissionRequest::new(""))
            .await
            .unwrap_err();
        assert_eq!(err.request_failure(), Some(&RequestFailure::Transport));
    }
}
