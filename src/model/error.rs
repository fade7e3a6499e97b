//! Error types for msglog.
//!
//! The pure core (`log`, `state`) has no failure modes: every message and
//! every navigation input in every state is valid. Errors only arise in the
//! impure shell, reading input, loading configuration, setting up logging
//! and driving the terminal.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all shell failures
//!   - [`InputError`] - Message source failures (file not found, no input, IO)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failures
//!   - `std::io::Error` - Terminal failures
//!   - [`TuiError`](crate::view::TuiError) - Event loop failures

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// Domain-specific errors convert via `From`, so `main` can use `?` end to end.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read messages from file or stdin.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Config file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup or rendering failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The event loop stopped on an error.
    #[error("TUI error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Errors encountered when reading messages from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified message file does not exist.
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use msglog::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.log")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.log"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that failed to open.
        path: PathBuf,
    },

    /// No file path given and stdin is an interactive terminal.
    ///
    /// Reading from a TTY would block the viewer waiting for the user, so
    /// this is rejected up front.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
