//! 表单主界面
//!
//! URL 输入、过期日期/时间选择、提交按钮和结果面板

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::widgets::{InputField, centered_rect};
use crate::interfaces::tui::app::{App, FocusField};
use crate::interfaces::tui::constants::{colors, popup};
use crate::utils::time_options::format_long_date;

const UTC_NOTE: &str = "All expiration times are in Coordinated Universal Time (UTC)";

pub fn draw_form_screen(frame: &mut Frame, app: &App, area: Rect) {
    let form_area = centered_rect(popup::FORM.width, popup::FORM.height, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::MUTED));
    frame.render_widget(block, form_area);
    let inner = form_area.inner(Margin::new(2, 1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Long URL
            Constraint::Length(3), // Date + time
            Constraint::Length(2), // Expiry preview
            Constraint::Length(3), // Button
            Constraint::Length(1),
            Constraint::Length(4), // Result
            Constraint::Min(0),
        ])
        .split(inner);

    InputField::new("Enter your long URL", &app.form.long_url)
        .active(app.focus == FocusField::LongUrl)
        .placeholder("https://example.com/very-long-url")
        .disabled(app.form.is_submitting())
        .with_cursor()
        .render(frame, chunks[0]);

    draw_expiration_row(frame, app, chunks[1]);
    draw_expiry_preview(frame, app, chunks[2]);
    draw_submit_button(frame, app, chunks[3]);

    if app.form.short_url.is_some() {
        draw_result_panel(frame, app, chunks[5]);
    }
}

fn draw_expiration_row(frame: &mut Frame, app: &App, area: Rect) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(18)])
        .split(area);

    let date_text = app
        .form
        .expiration_date
        .map(format_long_date)
        .unwrap_or_default();
    InputField::new("Expiration date (optional)", &date_text)
        .active(app.focus == FocusField::ExpirationDate)
        .placeholder("Pick a date")
        .hint("<- -> days, Up/Down weeks")
        .render(frame, row[0]);

    let time_text = app.form.expiration_time.to_string();
    InputField::new("Time", &time_text)
        .active(app.focus == FocusField::ExpirationTime)
        .disabled(!app.form.time_selectable())
        .hint("Up/Down")
        .render(frame, row[1]);
}

fn draw_expiry_preview(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    if let Some(label) = app.form.expiration_label() {
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(Color::White),
        )));
    }
    lines.push(Line::from(Span::styled(
        UTC_NOTE,
        Style::default().fg(colors::MUTED),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_submit_button(frame: &mut Frame, app: &App, area: Rect) {
    let style = if app.form.is_submitting() {
        Style::default().fg(Color::White).bg(colors::MUTED)
    } else {
        Style::default().fg(Color::White).bg(colors::ACCENT).bold()
    };

    let button = Paragraph::new(app.form.submit_label())
        .style(style)
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    frame.render_widget(button, area);
}

fn draw_result_panel(frame: &mut Frame, app: &App, area: Rect) {
    let short_url = app.form.short_url.as_deref().unwrap_or_default();
    let focused = app.focus == FocusField::ShortUrl;

    let copy_style = if focused {
        Style::default()
            .fg(colors::HIGHLIGHT_FG)
            .bg(colors::HIGHLIGHT_BG)
            .bold()
    } else {
        Style::default().fg(colors::MUTED)
    };

    let text = vec![
        Line::from(vec![
            Span::styled(short_url, Style::default().fg(colors::PRIMARY).bold()),
            Span::raw("  "),
            Span::styled("[Copy]", copy_style),
        ]),
        Line::from(Span::styled(
            if focused {
                "Press [c] or [Enter] to copy"
            } else {
                "Tab here to copy"
            },
            Style::default().fg(colors::MUTED),
        )),
    ];

    let border_color = if focused { colors::HIGHLIGHT_BG } else { colors::SUCCESS };
    let panel = Paragraph::new(text).block(
        Block::default()
            .title(" Your shortened URL ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(panel, area);
}
