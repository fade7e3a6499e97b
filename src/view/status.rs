//! Status screen shown while the message log is closed.

use super::constants::HINT_BAR_HEIGHT;
use crate::message_log::MessageLog;
use crate::model::DisplayLine;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

const STATUS_TITLE: &str = " msglog ";
const KEY_HINTS: &str = " Enter/m: open log   q: quit ";

/// Summary of the log: line count, most recent line, input state.
#[derive(Debug, Clone, Copy)]
pub struct StatusWidget<'a> {
    total: usize,
    latest: Option<&'a DisplayLine>,
    live: bool,
}

impl<'a> StatusWidget<'a> {
    /// Summary of `log`; `live` is whether input is still arriving.
    pub fn new(log: &'a MessageLog, live: bool) -> Self {
        Self {
            total: log.len(),
            latest: log.last(),
            live,
        }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [body_area, hint_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(HINT_BAR_HEIGHT)])
                .areas(area);

        let label = Style::default().add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::DarkGray);

        let input_state = if self.live {
            Span::styled("streaming", Style::default().fg(Color::Green))
        } else {
            Span::styled("complete", dim)
        };
        let latest = match self.latest {
            Some(line) => Span::raw(line.as_str()),
            None => Span::styled("(nothing yet)", dim),
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("Lines logged: ", label),
                Span::raw(self.total.to_string()),
            ]),
            Line::from(vec![Span::styled("Input: ", label), input_state]),
            Line::default(),
            Line::styled("Latest:", label),
            Line::from(latest),
        ];

        Paragraph::new(lines)
            .block(Block::bordered().title(STATUS_TITLE))
            .wrap(Wrap { trim: false })
            .render(body_area, buf);

        Line::styled(KEY_HINTS, dim).render(hint_area, buf);
    }
}
