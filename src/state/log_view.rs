//! An opened message log: a snapshot of the buffer plus a viewport over it.

use super::viewport::Viewport;
use crate::message_log::MessageLog;
use crate::model::{DisplayLine, NavInput, NavOutcome};

/// Everything a renderer needs to draw one frame of the log viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFrame<'a> {
    /// Lines to show, at most `rows` of them.
    pub visible: &'a [DisplayLine],
    /// Highlighted row within `visible`.
    pub cursor_row: usize,
    /// Absolute index of `visible[0]` in the full log.
    pub first_index: usize,
    /// Total number of lines in the log.
    pub total: usize,
    /// Height of the window in rows.
    pub rows: usize,
}

impl LogFrame<'_> {
    /// Absolute index of the highlighted line, `None` for an empty log.
    pub fn selected_index(&self) -> Option<usize> {
        (self.total > 0).then_some(self.first_index + self.cursor_row)
    }
}

/// State of the message log while it is open.
///
/// Created fresh on every open and dropped on close. Navigation runs
/// against the snapshot taken at open (or the last refresh), so the
/// viewport never sees the buffer change length under it.
#[derive(Debug, Clone)]
pub struct MessageLogView {
    lines: Vec<DisplayLine>,
    viewport: Viewport,
}

impl MessageLogView {
    /// Open a view on `log`, showing the most recent lines.
    pub fn open(log: &MessageLog) -> Self {
        let lines = log.snapshot();
        let viewport = Viewport::opened(log.limits().rows(), lines.len());
        Self { lines, viewport }
    }

    /// Re-snapshot `log` and jump back to its end.
    pub fn refresh(&mut self, log: &MessageLog) {
        self.lines = log.snapshot();
        self.viewport.move_to_end(self.lines.len());
    }

    /// Feed one navigation input to the viewport.
    pub fn handle_input(&mut self, input: NavInput) -> NavOutcome {
        self.viewport.navigate(input, self.lines.len())
    }

    /// Lines currently in the window.
    pub fn visible_slice(&self) -> &[DisplayLine] {
        self.viewport.visible_slice(&self.lines)
    }

    /// Highlighted row within [`visible_slice`](Self::visible_slice).
    pub fn cursor_row_index(&self) -> usize {
        self.viewport.cursor()
    }

    /// Number of lines in the snapshot.
    pub fn total_count(&self) -> usize {
        self.lines.len()
    }

    /// Cursor and paging state.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Bundle the query API for a renderer.
    pub fn frame(&self) -> LogFrame<'_> {
        LogFrame {
            visible: self.visible_slice(),
            cursor_row: self.cursor_row_index(),
            first_index: self.viewport.scroll_offset(),
            total: self.total_count(),
            rows: self.viewport.rows(),
        }
    }
}
