//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::AppMessage;
use crate::model::App;

/// Poll for an input event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate an input event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Paste(text) => AppMessage::Paste(text),
        // Terminal resize repaints automatically on the next draw
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

/// Translate a key event
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Only handle Press; Release/Repeat cause double input on Windows terminals
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::SUBMIT.matches(&key)
        || DefaultKeymap::SUBMIT_CTRL_ENTER.matches(&key)
        || DefaultKeymap::SUBMIT_ALT_ENTER.matches(&key)
    {
        return AppMessage::Submit;
    }

    if DefaultKeymap::CLEAR.matches(&key) {
        return AppMessage::Clear;
    }

    // Esc cancels an in-flight request, otherwise dismisses the status line
    if key.modifiers.is_empty() && key.code == KeyCode::Esc {
        if app.analysis.is_loading() {
            return AppMessage::Clear;
        }
        return AppMessage::ClearStatus;
    }

    // Everything else edits the text area
    match key.code {
        KeyCode::Enter if key.modifiers.is_empty() => AppMessage::Input('\n'),
        KeyCode::Tab if key.modifiers.is_empty() => AppMessage::Input('\t'),
        KeyCode::Backspace => AppMessage::Backspace,
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Input(ch)
        }
        _ => AppMessage::Noop,
    }
}
