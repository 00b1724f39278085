//! Wire protocol for the stress-analysis endpoint
//!
//! Request: `POST /api/v1/get-stress` with `{"text": "..."}`.
//! Response: `{"result": [[[token, ...], ...], ...]}` on 2xx.

use url::Url;

use stressmark_core::prelude::*;
use stressmark_core::{RequestFailure, StressResponse, StressResult};

/// Path of the analysis endpoint, relative to the service base URL
pub const STRESS_ENDPOINT: &str = "api/v1/get-stress";

/// Resolve [`STRESS_ENDPOINT`] against `base_url`.
///
/// A path prefix on the base URL is kept, so `http://host/app` resolves to
/// `http://host/app/api/v1/get-stress`.
pub fn endpoint_url(base_url: &str) -> Result<Url> {
    let mut base =
        Url::parse(base_url).map_err(|e| Error::invalid_url(base_url, e.to_string()))?;

    if base.cannot_be_a_base() {
        return Err(Error::invalid_url(base_url, "URL cannot be used as a base"));
    }

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(STRESS_ENDPOINT)
        .map_err(|e| Error::invalid_url(base_url, e.to_string()))
}

/// Decode a success body into a [`StressResult`].
///
/// Anything that is not `{"result": <nested string arrays>}` is a
/// [`RequestFailure::Decode`].
pub fn parse_response(body: &[u8]) -> Result<StressResult> {
    serde_json::from_slice::<StressResponse>(body)
        .map(|resp| resp.result)
        .map_err(|e| Error::request(RequestFailure::Decode, e.to_string()))
}
