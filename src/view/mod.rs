//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod log_panel;
mod renderer;
mod status;

pub use log_panel::{log_panel_area, MessageLogWidget};
pub use renderer::LogRenderer;
pub use status::StatusWidget;

use crate::config::KeyBindings;
use crate::model::InputError;
use crate::source::InputSource;
use crate::state::{handle_key_action, ActionResult, AppState, Screen};
use constants::TICK_INTERVAL_MS;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    input_source: InputSource,
    key_bindings: KeyBindings,
    /// Whether the source was still producing lines at the last poll
    input_live: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Put the terminal in raw mode on the alternate screen and wrap it.
    pub fn new(app_state: AppState, input_source: InputSource) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, app_state, input_source))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). Keys redraw immediately;
    /// the input source is polled whenever no key arrives within a tick.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK: Duration = Duration::from_millis(TICK_INTERVAL_MS);

        self.draw()?;

        loop {
            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(..) => self.draw()?,
                    _ => {}
                }
                continue;
            }

            if self.poll_input() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Assemble an app around an existing terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        input_source: InputSource,
    ) -> Self {
        let input_live = input_source.is_live();
        Self {
            terminal,
            app_state,
            input_source,
            key_bindings: KeyBindings::default(),
            input_live,
        }
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Pull new lines from the input source into the log.
    ///
    /// Returns true if anything visible changed: messages were appended or
    /// the source finished. A failing source ends input but not the viewer;
    /// messages already logged stay browsable.
    fn poll_input(&mut self) -> bool {
        let lines = match self.input_source.poll() {
            Ok(lines) => lines,
            Err(err) => {
                warn!(error = %err, "Input source failed, no further messages");
                Vec::new()
            }
        };
        let appended = if lines.is_empty() {
            0
        } else {
            self.app_state.ingest_lines(lines)
        };

        let live = self.input_source.is_live();
        let finished = self.input_live && !live;
        if finished {
            info!(lines = self.app_state.log().len(), "Input complete");
        }
        self.input_live = live;

        appended > 0 || finished
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            debug!(?key, "Unbound key");
            return false;
        };

        match handle_key_action(&mut self.app_state, action) {
            ActionResult::Quit => true,
            ActionResult::Handled | ActionResult::Unhandled => false,
        }
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        match self.app_state.screen() {
            Screen::Log(view) => self.terminal.render_log(view.frame())?,
            Screen::Status => {
                let status = StatusWidget::new(self.app_state.log(), self.input_live);
                self.terminal.draw(|frame| {
                    frame.render_widget(status, frame.area());
                })?;
            }
        }
        Ok(())
    }
}

/// Initialize and run the TUI application with an input source
///
/// Whatever the source already holds is loaded before the terminal is taken
/// over, and the viewer starts open on the most recent line. The terminal is
/// restored even if the event loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(
    mut input_source: InputSource,
    log: crate::message_log::MessageLog,
) -> Result<(), TuiError> {
    let mut app_state = AppState::new(log);
    let initial = app_state.ingest_lines(input_source.poll()?);
    info!(messages = initial, "Loaded initial input");
    app_state.open_log();

    let mut app = TuiApp::new(app_state, input_source)?;
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves the alternate screen
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
