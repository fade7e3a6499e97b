//! Size limits for the message log and its viewer.

/// Number of display lines visible in the viewer at once.
pub const ROWS_TO_DISPLAY: usize = 9;

/// Buffer length above which the oldest lines are dropped.
pub const MAX_LOG_LENGTH: usize = 500;

/// Buffer length right after a truncation.
///
/// Lower than [`MAX_LOG_LENGTH`] so a full buffer is not truncated again on
/// every following append.
pub const TRUNCATED_LOG_LENGTH: usize = MAX_LOG_LENGTH - 100;

/// Maximum characters per display line (unsplittable words excepted).
pub const LINE_MAX_LEN: usize = 50;

/// The four sizing parameters, bundled so tests can shrink them.
///
/// Production code uses [`LogLimits::default`]; the values are not read
/// from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLimits {
    /// Rows shown by the viewer. Treated as at least 1.
    pub rows_to_display: usize,
    /// Truncation threshold for the buffer.
    pub max_log_length: usize,
    /// Target length after truncation. Treated as at most `max_log_length`.
    pub truncated_log_length: usize,
    /// Wrap width in characters.
    pub line_max_len: usize,
}

impl Default for LogLimits {
    fn default() -> Self {
        Self {
            rows_to_display: ROWS_TO_DISPLAY,
            max_log_length: MAX_LOG_LENGTH,
            truncated_log_length: TRUNCATED_LOG_LENGTH,
            line_max_len: LINE_MAX_LEN,
        }
    }
}

impl LogLimits {
    /// Rows with the lower bound of 1 applied.
    pub fn rows(&self) -> usize {
        self.rows_to_display.max(1)
    }

    /// Post-truncation length, never above the truncation threshold.
    pub fn truncate_to(&self) -> usize {
        self.truncated_log_length.min(self.max_log_length)
    }
}
