//! Key binding configuration

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single key binding
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Check whether a key event matches this binding
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default key bindings
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));

    // Form actions. Plain Enter inserts a newline, so submit needs a modifier.
    pub const SUBMIT: KeyBinding = KeyBinding::alt(KeyCode::Char('a'));
    pub const SUBMIT_CTRL_ENTER: KeyBinding = KeyBinding::ctrl(KeyCode::Enter);
    pub const SUBMIT_ALT_ENTER: KeyBinding = KeyBinding::alt(KeyCode::Enter);
    pub const CLEAR: KeyBinding = KeyBinding::alt(KeyCode::Char('c'));
}
