//! Rendering capability for the message log viewer.

use super::log_panel::{log_panel_area, MessageLogWidget};
use crate::state::LogFrame;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Something that can draw a frame of the message log.
///
/// Called after every state change of an open log view.
pub trait LogRenderer {
    /// Failure reported by the drawing backend.
    type Error;

    /// Draw `frame`, replacing whatever was shown before.
    fn render_log(&mut self, frame: LogFrame<'_>) -> Result<(), Self::Error>;
}

impl<B: Backend> LogRenderer for Terminal<B> {
    type Error = io::Error;

    fn render_log(&mut self, frame: LogFrame<'_>) -> io::Result<()> {
        self.draw(|f| {
            let area = log_panel_area(f.area(), frame.rows);
            f.render_widget(MessageLogWidget::new(frame), area);
        })?;
        Ok(())
    }
}
