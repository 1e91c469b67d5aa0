use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen, FocusField};
use crate::interfaces::tui::constants::{DAYS_PER_PAGE, DAYS_PER_WEEK};

pub fn handle_form_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Esc => {
            app.current_screen = CurrentScreen::Exiting;
            return false;
        }
        KeyCode::F(1) => {
            app.current_screen = CurrentScreen::Help;
            return false;
        }
        KeyCode::Tab => {
            app.focus_next();
            return false;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return false;
        }
        _ => {}
    }

    match app.focus {
        FocusField::LongUrl => handle_long_url(app, key_code),
        FocusField::ExpirationDate => handle_date_picker(app, key_code),
        FocusField::ExpirationTime => handle_time_select(app, key_code),
        FocusField::ShortUrl => handle_short_url(app, key_code),
    }
    false
}

fn handle_long_url(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter => app.request_submit(),
        KeyCode::Char(c) => app.push_char(c),
        KeyCode::Backspace => app.pop_char(),
        _ => {}
    }
}

fn handle_date_picker(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter => app.request_submit(),
        KeyCode::Right | KeyCode::Char('l') => app.shift_date(1),
        KeyCode::Left | KeyCode::Char('h') => app.shift_date(-1),
        KeyCode::Down | KeyCode::Char('j') => app.shift_date(DAYS_PER_WEEK),
        KeyCode::Up | KeyCode::Char('k') => app.shift_date(-DAYS_PER_WEEK),
        KeyCode::PageDown => app.shift_date(DAYS_PER_PAGE),
        KeyCode::PageUp => app.shift_date(-DAYS_PER_PAGE),
        KeyCode::Char('t') => {
            app.clear_date();
            app.shift_date(0);
        }
        KeyCode::Backspace | KeyCode::Delete => app.clear_date(),
        _ => {}
    }
}

fn handle_time_select(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter => app.request_submit(),
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => app.next_time(),
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => app.prev_time(),
        _ => {}
    }
}

fn handle_short_url(app: &mut App, key_code: KeyCode) {
    if matches!(key_code, KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y')) {
        app.copy_short_url();
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::interfaces::tui::app::PendingAction;
    use crate::interfaces::tui::event_handler::test_support::app;
    use crate::utils::TimeOfDay;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_form_screen(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_submit() {
        let mut app = app();
        type_text(&mut app, "https://example.com");
        handle_form_screen(&mut app, KeyCode::Backspace);
        assert_eq!(app.form.long_url, "https://example.co");

        handle_form_screen(&mut app, KeyCode::Enter);
        assert!(app.form.is_submitting());
        assert!(matches!(app.pending, Some(PendingAction::Submit(_))));
    }

    #[test]
    fn test_date_picker_keys() {
        let mut app = app();
        app.focus = FocusField::ExpirationDate;

        handle_form_screen(&mut app, KeyCode::Right);
        assert_eq!(app.form.expiration_date, NaiveDate::from_ymd_opt(2026, 10, 20));

        handle_form_screen(&mut app, KeyCode::Down);
        assert_eq!(app.form.expiration_date, NaiveDate::from_ymd_opt(2026, 10, 27));

        // Clamped at tomorrow
        handle_form_screen(&mut app, KeyCode::PageUp);
        assert_eq!(app.form.expiration_date, NaiveDate::from_ymd_opt(2026, 10, 20));

        handle_form_screen(&mut app, KeyCode::Delete);
        assert_eq!(app.form.expiration_date, None);
    }

    #[test]
    fn test_time_needs_date() {
        let mut app = app();
        app.focus = FocusField::ExpirationTime;
        handle_form_screen(&mut app, KeyCode::Down);
        assert_eq!(app.form.expiration_time, TimeOfDay::default());

        app.form.expiration_date = NaiveDate::from_ymd_opt(2026, 12, 31);
        handle_form_screen(&mut app, KeyCode::Down);
        assert_eq!(app.form.expiration_time.to_string(), "12:30");
    }

    #[test]
    fn test_screen_switches() {
        let mut app = app();
        assert!(!handle_form_screen(&mut app, KeyCode::F(1)));
        assert_eq!(app.current_screen, CurrentScreen::Help);

        app.current_screen = CurrentScreen::Form;
        handle_form_screen(&mut app, KeyCode::Esc);
        assert_eq!(app.current_screen, CurrentScreen::Exiting);
    }
}
