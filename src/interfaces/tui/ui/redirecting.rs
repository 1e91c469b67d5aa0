use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, colors, popup, truncate_url};

/// Indicator shown between resolution and navigation
pub fn draw_redirecting_screen(frame: &mut Frame, target: &str, area: Rect) {
    let inner_area = Popup::new("Redirecting...", popup::REDIRECTING)
        .theme_color(colors::PRIMARY)
        .render(frame, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Taking you to",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(
            truncate_url(target, URL_TRUNCATE_LENGTH),
            Style::default().fg(colors::PRIMARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Opening in your browser",
            Style::default().fg(colors::MUTED),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner_area);
}
