//! UI state machine (pure).
//!
//! All state transitions are testable without a terminal.

pub mod action_handler;
pub mod app_state;
pub mod log_view;
pub mod viewport;

// Re-export for convenience
pub use action_handler::{handle_key_action, ActionResult};
pub use app_state::{AppState, Screen};
pub use log_view::{LogFrame, MessageLogView};
pub use viewport::Viewport;
