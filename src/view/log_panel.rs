//! Message log panel widget.
//!
//! Draws the rows of a [`LogFrame`] inside a bordered block titled
//! "Message Log", with the cursor row shown in reverse video and the
//! absolute position of the cursor in the top-right corner.

use super::constants::{BORDER_ROWS, LOG_PANEL_WIDTH, LOG_TITLE};
use crate::state::LogFrame;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Padding, Widget},
};

/// Placeholder row for an empty log.
const EMPTY_PLACEHOLDER: &str = "(no messages)";

/// Ratatui widget for one frame of the message log.
#[derive(Debug, Clone, Copy)]
pub struct MessageLogWidget<'a> {
    frame: LogFrame<'a>,
}

impl<'a> MessageLogWidget<'a> {
    /// Widget drawing one frame of the viewer.
    pub fn new(frame: LogFrame<'a>) -> Self {
        Self { frame }
    }
}

/// `[a/N]` for the highlighted line, or nothing for an empty log.
fn position_label(frame: &LogFrame<'_>) -> Option<String> {
    frame
        .selected_index()
        .map(|index| format!("[{}/{}]", index + 1, frame.total))
}

impl Widget for MessageLogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::bordered()
            .title(LOG_TITLE)
            .padding(Padding::horizontal(1));
        if let Some(label) = position_label(&self.frame) {
            block = block.title_top(Line::from(label).right_aligned());
        }

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.is_empty() {
            return;
        }

        if self.frame.visible.is_empty() {
            let placeholder = Line::styled(EMPTY_PLACEHOLDER, Style::default().fg(Color::DarkGray));
            buf.set_line(inner.x, inner.y, &placeholder, inner.width);
            return;
        }

        let highlight = Style::default().add_modifier(Modifier::REVERSED);
        for (row, line) in self
            .frame
            .visible
            .iter()
            .enumerate()
            .take(usize::from(inner.height))
        {
            // take() bounds row by inner.height, so it fits in u16
            let y = inner.y + row as u16;
            if row == self.frame.cursor_row {
                buf.set_style(Rect::new(inner.x, y, inner.width, 1), highlight);
            }
            buf.set_line(inner.x, y, &Line::from(line.as_str()), inner.width);
        }
    }
}

/// Centered area for a log panel showing `rows` lines, clipped to `area`.
pub fn log_panel_area(area: Rect, rows: usize) -> Rect {
    let height = u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_add(BORDER_ROWS)
        .min(area.height);
    let width = LOG_PANEL_WIDTH.min(area.width);

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
