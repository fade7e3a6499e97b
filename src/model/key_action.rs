//! Domain-level inputs independent of key bindings.

/// A decoded directional or cancel input for the message log viewer.
///
/// The mapping from `crossterm::event::KeyEvent` to `NavInput` is handled by
/// `KeyBindings`; the viewport only ever sees these five inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavInput {
    /// Move the selection one line towards older entries. Default: k/↑
    Up,
    /// Move the selection one line towards newer entries. Default: j/↓
    Down,
    /// Jump one page (rows - 1 entries) back. Default: h/←/Page Up
    Left,
    /// Jump one page (rows - 1 entries) forward. Default: l/→/Page Down
    Right,
    /// Close the viewer. Default: Esc/Backspace
    Cancel,
}

/// Result of feeding one `NavInput` to a viewport.
///
/// `Unhandled` covers both "boundary reached" and "nothing to move";
/// callers cannot tell them apart, and only use the distinction between
/// handled and unhandled to decide on feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Cursor or scroll offset changed.
    Moved,
    /// Input was not applicable in the current state. Nothing changed.
    Unhandled,
    /// The viewer should close.
    Closed,
}

impl NavOutcome {
    /// The boolean "handled" signal reported to the input collaborator.
    pub fn is_handled(self) -> bool {
        !matches!(self, NavOutcome::Unhandled)
    }
}

/// Application-level actions that key bindings map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Navigate the open message log.
    Nav(NavInput),
    /// Open the message log viewer. Default: Enter/m
    OpenLog,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl From<NavInput> for KeyAction {
    fn from(input: NavInput) -> Self {
        KeyAction::Nav(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moved_and_closed_count_as_handled() {
        assert!(NavOutcome::Moved.is_handled());
        assert!(NavOutcome::Closed.is_handled());
    }

    #[test]
    fn unhandled_is_not_handled() {
        assert!(!NavOutcome::Unhandled.is_handled());
    }

    #[test]
    fn nav_input_converts_into_key_action() {
        let action: KeyAction = NavInput::Left.into();
        assert_eq!(action, KeyAction::Nav(NavInput::Left));
    }

    #[test]
    fn nav_actions_discriminate_by_direction() {
        assert_ne!(KeyAction::Nav(NavInput::Up), KeyAction::Nav(NavInput::Down));
    }
}
