//! Capacity-bounded, append-only buffer of display lines.

use super::limits::LogLimits;
use super::wrap::wrap;
use crate::model::DisplayLine;
use std::collections::VecDeque;
use tracing::{debug, info};

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;

/// The message log.
///
/// Holds wrapped display lines oldest first. After every [`append`] the
/// length is at most `max_log_length`; when an append pushes it over, the
/// oldest lines are dropped until exactly `truncated_log_length` remain.
///
/// The log is an ordinary owned value. Whoever opens a viewer borrows it to
/// take a [`snapshot`]; there is no global instance.
///
/// [`append`]: MessageLog::append
/// [`snapshot`]: MessageLog::snapshot
#[derive(Debug, Clone)]
pub struct MessageLog {
    /// Oldest at front, newest at back
    lines: VecDeque<DisplayLine>,
    limits: LogLimits,
    /// Mirror every raw message to the tracing sink
    echo_to_console: bool,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(LogLimits::default())
    }
}

impl MessageLog {
    /// Create an empty log with the given limits. Echo is off.
    pub fn new(limits: LogLimits) -> Self {
        Self {
            lines: VecDeque::with_capacity(limits.max_log_length.min(1024)),
            limits,
            echo_to_console: false,
        }
    }

    /// Enable or disable mirroring of raw messages to the diagnostic sink.
    pub fn with_echo(mut self, echo_to_console: bool) -> Self {
        self.echo_to_console = echo_to_console;
        self
    }

    /// Wrap `message` and append the resulting lines, truncating if needed.
    pub fn append(&mut self, message: &str) {
        if self.echo_to_console {
            info!(target: "msglog::echo", "{message}");
        }

        self.lines
            .extend(wrap(message, self.limits.line_max_len));

        if self.lines.len() > self.limits.max_log_length {
            let excess = self.lines.len() - self.limits.truncate_to();
            self.lines.drain(..excess);
            debug!(dropped = excess, remaining = self.lines.len(), "Truncated message log");
        }
    }

    /// Copy of all display lines, oldest first.
    ///
    /// The copy is detached from the log: later appends do not affect it.
    pub fn snapshot(&self) -> Vec<DisplayLine> {
        self.lines.iter().cloned().collect()
    }

    /// Number of display lines currently held.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True before the first append.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Most recent display line, if any.
    pub fn last(&self) -> Option<&DisplayLine> {
        self.lines.back()
    }

    /// Iterate display lines oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DisplayLine> {
        self.lines.iter()
    }

    /// Sizing limits this log was built with.
    pub fn limits(&self) -> LogLimits {
        self.limits
    }

    /// Whether each appended message is mirrored to the echo target.
    pub fn echo_to_console(&self) -> bool {
        self.echo_to_console
    }
}
