use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen, FocusField};
use crate::interfaces::tui::constants::colors;
use crate::services::RedirectState;

/// Draw title bar
pub fn draw_title_bar(frame: &mut Frame, area: Rect) {
    let title_text = vec![Line::from(vec![
        Span::styled("URL Shortener", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(
            "Shorten your long URLs with ease",
            Style::default().fg(Color::White),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar with the latest notification
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if let Some(toast) = app.toasts.latest() {
        if toast.is_destructive() {
            (
                format!("[ERROR] {}", toast.text()),
                Style::default().fg(Color::White).bg(colors::ERROR).bold(),
            )
        } else {
            (
                toast.text(),
                Style::default().fg(Color::Black).bg(colors::SUCCESS).bold(),
            )
        }
    } else if app.form.redirect_state == RedirectState::Resolving {
        (
            "Looking up short URL...".to_string(),
            Style::default().fg(Color::Yellow),
        )
    } else if app.form.is_submitting() {
        (
            "Shortening...".to_string(),
            Style::default().fg(Color::Yellow),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(colors::PRIMARY))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.current_screen {
        CurrentScreen::Form => {
            let mut keys = vec![("Tab", "Next Field", Color::Cyan)];
            match app.focus {
                FocusField::LongUrl => {}
                FocusField::ExpirationDate => {
                    keys.push(("Arrows", "Pick Date", Color::Cyan));
                    keys.push(("Del", "Clear", Color::Yellow));
                }
                FocusField::ExpirationTime => keys.push(("Up/Down", "Pick Time", Color::Cyan)),
                FocusField::ShortUrl => keys.push(("c", "Copy", Color::Green)),
            }
            if app.focus != FocusField::ShortUrl {
                keys.push(("Enter", "Shorten", Color::Green));
            }
            keys.push(("F1", "Help", Color::Blue));
            keys.push(("Esc", "Quit", Color::Magenta));
            keys
        }
        CurrentScreen::Exiting => vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)],
        CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(footer, area);
}
