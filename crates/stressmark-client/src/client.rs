//! Stress-analysis service client
//!
//! The [`StressService`] trait is the seam between the application layer and
//! the network. The TUI, the headless runner, and tests all go through it.

use std::time::Duration;

use url::Url;

use stressmark_core::prelude::*;
use stressmark_core::{RequestFailure, StressResult, SubmissionRequest};

use crate::protocol::{endpoint_url, parse_response};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Stress-analysis operations
///
/// Exactly one request is made per call. No retries.
#[trait_variant::make(StressService: Send)]
pub trait LocalStressService {
    /// Submit text and return the service's line → word → token result
    async fn get_stress(&self, request: &SubmissionRequest) -> Result<StressResult>;
}

/// HTTP implementation backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpStressClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpStressClient {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint_url(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        debug!("Stress service endpoint: {}", endpoint);
        Ok(Self { http, endpoint })
    }

    /// The fully resolved endpoint URL
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl StressService for HttpStressClient {
    async fn get_stress(&self, request: &SubmissionRequest) -> Result<StressResult> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::request(
                RequestFailure::Status(status.as_u16()),
                status.canonical_reason().unwrap_or("non-success status"),
            ));
        }

        let body = response.bytes().await.map_err(classify_transport_error)?;
        trace!("Stress response: {} bytes", body.len());
        parse_response(&body)
    }
}

fn classify_transport_error(e: reqwest::Error) -> Error {
    let kind = if e.is_timeout() {
        RequestFailure::Timeout
    } else {
        RequestFailure::Transport
    };
    Error::request(kind, e.to_string())
}
