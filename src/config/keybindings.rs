//! Keyboard bindings configuration.

use crate::model::{KeyAction, NavInput};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Arrow keys plus vim-style letters for navigation.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Matching ignores key kind and state, so press and repeat events from
    /// terminals with enhanced keyboard reporting resolve the same way.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: impl Into<KeyAction>) {
        self.bindings
            .insert(KeyEvent::new(code, modifiers), action.into());
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Line movement
        keys.bind(KeyCode::Up, none, NavInput::Up);
        keys.bind(KeyCode::Char('k'), none, NavInput::Up);
        keys.bind(KeyCode::Down, none, NavInput::Down);
        keys.bind(KeyCode::Char('j'), none, NavInput::Down);

        // Paging
        keys.bind(KeyCode::Left, none, NavInput::Left);
        keys.bind(KeyCode::Char('h'), none, NavInput::Left);
        keys.bind(KeyCode::PageUp, none, NavInput::Left);
        keys.bind(KeyCode::Right, none, NavInput::Right);
        keys.bind(KeyCode::Char('l'), none, NavInput::Right);
        keys.bind(KeyCode::PageDown, none, NavInput::Right);

        // Close viewer
        keys.bind(KeyCode::Esc, none, NavInput::Cancel);
        keys.bind(KeyCode::Backspace, none, NavInput::Cancel);

        // Open viewer
        keys.bind(KeyCode::Enter, none, KeyAction::OpenLog);
        keys.bind(KeyCode::Char('m'), none, KeyAction::OpenLog);

        // Application
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
