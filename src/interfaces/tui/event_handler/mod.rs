//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! - form_screen: the shortening form and the result panel
//! - misc_screens: Help, Exiting

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen};

mod form_screen;
mod misc_screens;

use form_screen::*;
use misc_screens::*;

/// Handle keyboard input based on current screen. Returns whether the app
/// should exit.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    // Nothing but quitting while the redirect indicator is up
    if app.form.is_redirecting() {
        return matches!(key.code, KeyCode::Esc | KeyCode::Char('q'));
    }

    match app.current_screen {
        CurrentScreen::Form => handle_form_screen(app, key.code),
        CurrentScreen::Help => handle_help_screen(app, key.code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key.code),
    }
}
