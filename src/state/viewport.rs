//! Two-level cursor over a list of display lines.
//!
//! The viewport shows `rows` consecutive lines starting at `scroll_offset`.
//! `cursor` is the selected row *within* that window, so the selected
//! absolute line is `scroll_offset + cursor`.
//!
//! For a list of `total` lines, every operation leaves:
//! - `scroll_offset <= total.saturating_sub(rows)`
//! - `cursor < min(rows, total)` when `total > 0`, `cursor == 0` otherwise

use crate::model::{NavInput, NavOutcome};
use std::ops::Range;

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;

/// Cursor and scroll position of an open message log viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    cursor: usize,
    scroll_offset: usize,
    rows: usize,
}

impl Viewport {
    /// Viewport at the top of an empty list. `rows` is raised to at least 1.
    pub fn new(rows: usize) -> Self {
        Self {
            cursor: 0,
            scroll_offset: 0,
            rows: rows.max(1),
        }
    }

    /// Viewport as it appears when the log is opened: tail of the list
    /// visible, last line selected.
    pub fn opened(rows: usize, total: usize) -> Self {
        let mut viewport = Self::new(rows);
        viewport.move_to_end(total);
        viewport
    }

    /// Row of the selection within the visible window.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the first visible line.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Number of rows on one page.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Index of the selected line in the full list.
    pub fn absolute_index(&self) -> usize {
        self.scroll_offset + self.cursor
    }

    /// Select the last line and scroll so the final `rows` lines are shown.
    ///
    /// Idempotent for a fixed `total`.
    pub fn move_to_end(&mut self, total: usize) {
        if total == 0 {
            self.cursor = 0;
            self.scroll_offset = 0;
            return;
        }
        self.cursor = (total - 1).min(self.rows - 1);
        self.scroll_offset = total.saturating_sub(self.rows);
    }

    /// Apply one navigation input against a list of `total` lines.
    ///
    /// Returns [`NavOutcome::Moved`] only if the cursor or scroll offset
    /// actually changed. Inputs that hit a boundary, or that would leave the
    /// state as it is, are no-ops reported as [`NavOutcome::Unhandled`].
    /// [`NavInput::Cancel`] always yields [`NavOutcome::Closed`] and leaves
    /// the position untouched.
    pub fn navigate(&mut self, input: NavInput, total: usize) -> NavOutcome {
        if input == NavInput::Cancel {
            return NavOutcome::Closed;
        }
        if total == 0 {
            return NavOutcome::Unhandled;
        }

        let before = *self;
        let rows = self.rows;
        let page = self.page_step();
        let max_scroll = total.saturating_sub(rows);
        let absolute = self.absolute_index();

        match input {
            NavInput::Up => {
                if absolute > 0 {
                    if self.cursor > 0 {
                        self.cursor -= 1;
                    } else {
                        self.scroll_offset -= 1;
                    }
                }
            }
            NavInput::Down => {
                if absolute + 1 < total {
                    if self.cursor + 1 < rows {
                        self.cursor += 1;
                    } else if self.scroll_offset < max_scroll {
                        self.scroll_offset += 1;
                    }
                }
            }
            NavInput::Left => {
                if absolute > 0 {
                    self.cursor = 0;
                    self.scroll_offset = self.scroll_offset.saturating_sub(page);
                }
            }
            NavInput::Right => {
                if self.scroll_offset + rows + page < total {
                    self.cursor = rows - 1;
                    self.scroll_offset += page;
                } else {
                    self.cursor = rows.min(total) - 1;
                    self.scroll_offset = max_scroll;
                }
            }
            NavInput::Cancel => {}
        }

        self.clamp(total);

        if *self == before {
            NavOutcome::Unhandled
        } else {
            NavOutcome::Moved
        }
    }

    /// Pull cursor and scroll offset back into range for `total` lines.
    pub fn clamp(&mut self, total: usize) {
        if total == 0 {
            self.cursor = 0;
            self.scroll_offset = 0;
            return;
        }
        self.scroll_offset = self.scroll_offset.min(total.saturating_sub(self.rows));
        self.cursor = self.cursor.min(self.rows.min(total) - 1);
    }

    /// Range of line indices currently visible.
    pub fn visible_range(&self, total: usize) -> Range<usize> {
        let start = self.scroll_offset.min(total);
        let end = (self.scroll_offset + self.rows).min(total);
        start..end
    }

    /// The visible window of `lines`: at most `rows` items starting at the
    /// scroll offset.
    pub fn visible_slice<'a, T>(&self, lines: &'a [T]) -> &'a [T] {
        &lines[self.visible_range(lines.len())]
    }

    /// Lines moved by one page: one less than a full screen, so the edge row
    /// stays visible across the jump.
    fn page_step(&self) -> usize {
        (self.rows - 1).max(1)
    }
}
