//! 通用输入框组件
//!
//! 表单里的三个字段都用它渲染：
//! - 激活状态高亮
//! - 空值时显示占位符
//! - 禁用状态（时间选择在选日期前不可用）

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// 使用 Builder 模式配置各种选项
///
/// # 示例
///
/// ```rust,ignore
/// InputField::new("Long URL", &app.form.long_url)
///     .active(true)
///     .placeholder("https://example.com/very-long-url")
///     .with_cursor()
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    placeholder: Option<&'a str>,
    /// 右侧提示，例如 "<- ->"
    hint: Option<&'a str>,
    disabled: bool,
    /// 激活时把终端光标放在文本末尾
    show_cursor: bool,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            placeholder: None,
            hint: None,
            disabled: false,
            show_cursor: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_cursor(mut self) -> Self {
        self.show_cursor = true;
        self
    }

    fn display_title(&self) -> String {
        let mut title = format!(" {} ", self.title);
        if self.disabled {
            title.push_str("[disabled] ");
        } else if self.is_active
            && let Some(hint) = self.hint
        {
            title.push_str(&format!("[{}] ", hint));
        }
        title
    }

    fn border_style(&self) -> Style {
        if self.disabled {
            Style::default().fg(colors::MUTED)
        } else if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn display_line(&self) -> Line<'a> {
        if self.value.is_empty() {
            let text = self.placeholder.unwrap_or_default();
            Line::from(Span::styled(text, Style::default().fg(colors::MUTED)))
        } else if self.disabled {
            Line::from(Span::styled(self.value, Style::default().fg(colors::MUTED)))
        } else {
            Line::from(self.value)
        }
    }

    /// 渲染输入框，区域高度应为 3
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let input = Paragraph::new(self.display_line()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, area);

        if self.show_cursor && self.is_active && !self.disabled {
            let max_x = area.x + area.width.saturating_sub(2);
            let x = (area.x + 1 + self.value.chars().count() as u16).min(max_x);
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_marks_disabled() {
        let field = InputField::new("Time", "12:00").disabled(true);
        assert!(field.display_title().contains("[disabled]"));
    }

    #[test]
    fn test_hint_only_when_active() {
        let field = InputField::new("Date", "").hint("<- ->");
        assert!(!field.display_title().contains("<- ->"));

        let field = InputField::new("Date", "").hint("<- ->").active(true);
        assert!(field.display_title().contains("<- ->"));
    }

    #[test]
    fn test_placeholder_when_empty() {
        let field = InputField::new("Long URL", "").placeholder("https://example.com");
        assert_eq!(field.display_line().to_string(), "https://example.com");

        let field = InputField::new("Long URL", "https://a.io").placeholder("https://example.com");
        assert_eq!(field.display_line().to_string(), "https://a.io");
    }
}
