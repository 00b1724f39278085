//! Custom widget components

mod header;
mod status_bar;
mod stress_view;
mod text_input;

pub use header::MainHeader;
pub use status_bar::StatusBar;
pub use stress_view::{build_lines, StressView};
pub use text_input::TextInput;

// Re-export state types from app layer (these are used by render/)
pub use stressmark_app::result_view_state::ResultViewState;
