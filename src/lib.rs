//! stressmark - terminal client for a text stress-analysis service
//!
//! The binary lives in `main.rs`; this library holds the headless runner so
//! it can be driven from integration tests.

pub mod headless;

pub use headless::{run_headless, OutputFormat};
