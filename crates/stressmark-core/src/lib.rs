//! # stressmark-core - Core Domain Types
//!
//! Foundation crate for stressmark. Provides the stress-analysis data model,
//! the whitespace-preserving render transform, error handling, and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Data Model (`stress`)
//! - [`SubmissionRequest`] - Request body sent to the stress-analysis service
//! - [`StressResponse`] - Success body returned by the service
//! - [`StressResult`], [`Line`], [`Word`] - Nested line → word → token structure
//! - [`Shape`] - Token count per word per line, for structure comparisons
//!
//! ### Rendering (`render`)
//! - [`render_result()`] - Replace spaces in every token with a marker
//! - [`RenderedResult`] - Display-safe copy of a [`StressResult`]
//! - [`WhitespaceMarker`] - Non-breaking-space marker flavour
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum organized by layer
//! - [`RequestFailure`] - Kind of a failed stress request
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use stressmark_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod render;
pub mod stress;

/// Prelude for common imports used throughout all stressmark crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, RequestFailure, Result};
pub use render::{render_result, render_token, RenderedResult, WhitespaceMarker};
pub use stress::{Line, Shape, StressResponse, StressResult, SubmissionRequest, Token, Word};
