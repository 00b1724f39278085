//! stressmark-app - Application state and orchestration for stressmark
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine abstraction shared by the TUI and headless runners, configuration
//! loading, and the background action that talks to the stress-analysis service.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input;
pub mod input_key;
pub mod message;
pub mod process;
pub mod result_view_state;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{InputEdit, Message, RequestId};
pub use state::AppState;
