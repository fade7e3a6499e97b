//! Layout dimension constants for TUI rendering.

use crate::message_log::LINE_MAX_LEN;

/// Title shown in the log panel border.
pub const LOG_TITLE: &str = " Message Log ";

/// Width of the log panel: one wrapped line plus borders and a column of
/// padding on each side.
pub const LOG_PANEL_WIDTH: u16 = LINE_MAX_LEN as u16 + 4;

/// Rows taken by the top and bottom border of a bordered block.
pub const BORDER_ROWS: u16 = 2;

/// Height of the key hint line on the status screen.
pub const HINT_BAR_HEIGHT: u16 = 1;

/// How long the event loop waits for a key before polling input again.
pub const TICK_INTERVAL_MS: u64 = 100;
