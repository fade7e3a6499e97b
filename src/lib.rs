//! msglog: bounded message log with a paginated terminal viewer.
//!
//! Messages are word-wrapped into short display lines and kept in a log
//! that is capped by trimming its oldest lines. The viewer pages through
//! the log with a two-level cursor (row within the window plus scroll
//! offset).
//!
//! Pure Core / Impure Shell:
//! - core: [`message_log`], [`state`], [`parser`], [`integration`], [`model`]
//! - shell: [`source`], [`view`], [`config`], [`logging`]

pub mod config;
pub mod logging;
pub mod message_log;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;

// Re-export main loop integration
pub mod integration;
