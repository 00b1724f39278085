//! Configuration file parsing for stressmark
//!
//! Settings live in `config.toml` under the platform config directory, or at
//! a path given on the command line.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
