use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

fn section(title: &str) -> Line<'_> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

fn entry<'a>(keys: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<18}", keys), Style::default().fg(Color::Cyan)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let help_text = vec![
        Line::from(""),
        section("FORM"),
        entry("Tab / Shift+Tab", "Move between fields"),
        entry("Enter", "Shorten the URL"),
        entry("Backspace", "Delete a character"),
        Line::from(""),
        section("EXPIRATION DATE"),
        entry("Left/Right, h/l", "Previous / next day"),
        entry("Up/Down, k/j", "Previous / next week"),
        entry("PageUp/PageDown", "Previous / next 30 days"),
        entry("t", "Tomorrow"),
        entry("Del, Backspace", "No expiration"),
        Line::from(""),
        section("EXPIRATION TIME"),
        entry("Up/Down", "Half-hour steps (needs a date)"),
        Line::from(""),
        section("RESULT"),
        entry("c, y, Enter", "Copy the short URL"),
        Line::from(""),
        section("GENERAL"),
        entry("F1", "Toggle this help"),
        entry("Esc", "Quit"),
        entry("Ctrl+C", "Quit immediately"),
        Line::from(""),
        Line::from(Span::styled(
            "All expiration times are in UTC",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(help_text), inner_area);
}
