//! # stressmark-client - Stress-Analysis Service Client
//!
//! Talks to the external stress-analysis service over HTTP: builds the
//! `POST /api/v1/get-stress` request, classifies failures, and decodes the
//! nested line → word → token response.
//!
//! Depends on [`stressmark_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Service Seam
//! - [`StressService`] - Async trait the application layer calls (Send futures)
//! - [`LocalStressService`] - Non-Send variant generated by `trait_variant`
//!
//! ### HTTP Implementation
//! - [`HttpStressClient`] - `reqwest`-backed implementation with a timeout
//!
//! ### Protocol
//! - [`STRESS_ENDPOINT`] - Path of the analysis endpoint
//! - [`endpoint_url()`] - Resolve the endpoint against a base URL
//! - [`parse_response()`] - Decode a success body

pub mod client;
pub mod protocol;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{HttpStressClient, LocalStressService, StressService, DEFAULT_TIMEOUT};
pub use protocol::{endpoint_url, parse_response, STRESS_ENDPOINT};
