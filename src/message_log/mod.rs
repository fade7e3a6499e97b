//! Message log core (pure).
//!
//! Incoming messages are wrapped into fixed-width display lines and kept in
//! a capacity-bounded, append-only buffer. Nothing here touches the terminal.

pub mod buffer;
pub mod limits;
pub mod wrap;

pub use buffer::MessageLog;
pub use limits::{
    LogLimits, LINE_MAX_LEN, MAX_LOG_LENGTH, ROWS_TO_DISPLAY, TRUNCATED_LOG_LENGTH,
};
pub use wrap::wrap;
