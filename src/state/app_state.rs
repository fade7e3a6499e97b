//! Application state and transitions.
//!
//! AppState owns the message log and knows which screen is showing.
//! All transitions are plain method calls; nothing here touches the
//! terminal.

use super::log_view::MessageLogView;
use crate::integration;
use crate::message_log::MessageLog;
use tracing::debug;

/// Which screen the UI is showing.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Summary line with the latest message and key hints.
    Status,
    /// The message log viewer, with its per-open state.
    Log(MessageLogView),
}

/// Root state of the application.
///
/// # State Machine
///
/// - Status → Log (via `open_log`): snapshot taken, cursor on the last line
/// - Log → Status (via `close_log`): viewer state is discarded
/// - Log → Log (via `ingest_lines` with new messages): re-snapshot, cursor
///   back to the last line
#[derive(Debug, Clone)]
pub struct AppState {
    /// The message log; lives for the whole run.
    log: MessageLog,
    screen: Screen,
}

impl AppState {
    /// Start on the status screen.
    pub fn new(log: MessageLog) -> Self {
        Self {
            log,
            screen: Screen::Status,
        }
    }

    /// The message log backing every view.
    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// Screen currently shown.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// True while the message log viewer is showing.
    pub fn is_log_open(&self) -> bool {
        matches!(self.screen, Screen::Log(_))
    }

    /// The open viewer, if any.
    pub fn log_view(&self) -> Option<&MessageLogView> {
        match &self.screen {
            Screen::Log(view) => Some(view),
            Screen::Status => None,
        }
    }

    pub(crate) fn log_view_mut(&mut self) -> Option<&mut MessageLogView> {
        match &mut self.screen {
            Screen::Log(view) => Some(view),
            Screen::Status => None,
        }
    }

    /// Open the viewer with a fresh viewport. Returns false if already open.
    pub fn open_log(&mut self) -> bool {
        if self.is_log_open() {
            return false;
        }
        debug!(lines = self.log.len(), "Opening message log");
        self.screen = Screen::Log(MessageLogView::open(&self.log));
        true
    }

    /// Close the viewer. Returns false if it was not open.
    pub fn close_log(&mut self) -> bool {
        if !self.is_log_open() {
            return false;
        }
        debug!("Closing message log");
        self.screen = Screen::Status;
        true
    }

    /// Append raw input lines to the log.
    ///
    /// Returns the number of messages appended. If the viewer is open and
    /// anything was appended, it is refreshed and scrolled to the end.
    pub fn ingest_lines(&mut self, lines: Vec<String>) -> usize {
        let appended = integration::ingest_lines(&mut self.log, lines);
        if appended > 0 {
            if let Screen::Log(view) = &mut self.screen {
                view.refresh(&self.log);
            }
        }
        appended
    }
}
