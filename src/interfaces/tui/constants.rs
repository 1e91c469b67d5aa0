//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

/// Short URL / redirect target display truncation
pub const URL_TRUNCATE_LENGTH: usize = 60;

/// Date picker steps
pub const DAYS_PER_WEEK: i64 = 7;
pub const DAYS_PER_PAGE: i64 = 30;

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 表单主体
    pub const FORM: PopupSize = PopupSize::new(80, 100);
    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(70, 85);
    /// 退出确认
    pub const EXITING: PopupSize = PopupSize::new(50, 30);
    /// 跳转提示
    pub const REDIRECTING: PopupSize = PopupSize::new(60, 30);
}

pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 提交按钮
    pub const ACCENT: Color = Color::Magenta;
    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    pub const HIGHLIGHT_FG: Color = Color::Black;
}

/// Truncate long URLs for display, keeping the head
pub fn truncate_url(url: &str, max_chars: usize) -> String {
    if url.chars().count() <= max_chars {
        return url.to_string();
    }
    let head: String = url.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", head)
}
