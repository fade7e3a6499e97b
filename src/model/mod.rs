//! Domain model types (pure).

pub mod display_line;
pub mod error;
pub mod key_action;

// Re-export for convenience
pub use display_line::DisplayLine;
pub use error::{AppError, InputError};
pub use key_action::{KeyAction, NavInput, NavOutcome};
