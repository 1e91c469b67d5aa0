// UI submodules
mod common;
mod exiting;
mod form_screen;
mod help;
mod redirecting;
pub mod widgets;

// Re-export common utilities
pub use common::{draw_footer, draw_status_bar, draw_title_bar};

// Re-export screen drawing functions
pub use exiting::draw_exiting_screen;
pub use form_screen::draw_form_screen;
pub use help::draw_help_screen;
pub use redirecting::draw_redirecting_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(1),    // Form
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    draw_title_bar(frame, chunks[0]);
    draw_form_screen(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);
    draw_footer(frame, app, chunks[3]);

    // Overlays
    match app.current_screen {
        CurrentScreen::Form => {}
        CurrentScreen::Help => draw_help_screen(frame, area),
        CurrentScreen::Exiting => draw_exiting_screen(frame, area),
    }

    if let Some(target) = app.form.redirect_target() {
        draw_redirecting_screen(frame, target, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::interfaces::tui::event_handler::test_support::app;
    use crate::services::RedirectState;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_form_renders_title_and_button() {
        let app = app();
        let screen = render(&app);
        assert!(screen.contains("URL Shortener"));
        assert!(screen.contains("Shorten URL"));
        assert!(screen.contains("Pick a date"));
        assert!(!screen.contains("Your shortened URL"));
    }

    #[test]
    fn test_result_panel_and_expiry_preview() {
        let mut app = app();
        app.form.short_url = Some("https://short.url/?u=abc123".into());
        app.form.expiration_date = chrono::NaiveDate::from_ymd_opt(2026, 10, 20);
        let screen = render(&app);
        assert!(screen.contains("Your shortened URL"));
        assert!(screen.contains("https://short.url/?u=abc123"));
        assert!(screen.contains("Expires: October 20th, 2026 at 12:00 UTC"));
    }

    #[test]
    fn test_redirect_overlay() {
        let mut app = app();
        app.form.redirect_state = RedirectState::Redirecting {
            target: "https://example.com".into(),
        };
        let screen = render(&app);
        assert!(screen.contains("Redirecting"));
        assert!(screen.contains("https://example.com"));
    }
}
