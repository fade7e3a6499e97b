//! Key action dispatch.
//!
//! Routes a decoded [`KeyAction`] to the right state transition and reports
//! whether it had an effect, so the shell can decide on feedback.

use super::app_state::AppState;
use crate::model::{KeyAction, NavOutcome};
use tracing::debug;

/// What happened in response to one key action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// State changed; redraw.
    Handled,
    /// Nothing changed (boundary reached, wrong screen, already open).
    Unhandled,
    /// The application should exit.
    Quit,
}

impl ActionResult {
    /// Whether the action changed state and needs a redraw.
    pub fn is_handled(self) -> bool {
        self == ActionResult::Handled
    }
}

/// Apply `action` to `state`.
///
/// Navigation inputs only apply while the log is open; a
/// [`NavOutcome::Closed`] from the viewer closes it.
pub fn handle_key_action(state: &mut AppState, action: KeyAction) -> ActionResult {
    match action {
        KeyAction::Quit => ActionResult::Quit,
        KeyAction::OpenLog => {
            if state.open_log() {
                ActionResult::Handled
            } else {
                ActionResult::Unhandled
            }
        }
        KeyAction::Nav(input) => {
            let Some(view) = state.log_view_mut() else {
                return ActionResult::Unhandled;
            };
            match view.handle_input(input) {
                NavOutcome::Moved => ActionResult::Handled,
                NavOutcome::Closed => {
                    state.close_log();
                    ActionResult::Handled
                }
                NavOutcome::Unhandled => {
                    debug!(?input, "Navigation input had no effect");
                    ActionResult::Unhandled
                }
            }
        }
    }
}
