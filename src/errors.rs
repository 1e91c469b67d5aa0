use std::fmt;

use crate::client::ClientError;

#[derive(Debug, Clone)]
pub enum LinkFormError {
    Validation(String),
    Gateway(String),
    Clipboard(String),
    Navigation(String),
    Config(String),
    Terminal(String),
    Serialization(String),
}

impl LinkFormError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkFormError::Validation(_) => "E001",
            LinkFormError::Gateway(_) => "E002",
            LinkFormError::Clipboard(_) => "E003",
            LinkFormError::Navigation(_) => "E004",
            LinkFormError::Config(_) => "E005",
            LinkFormError::Terminal(_) => "E006",
            LinkFormError::Serialization(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkFormError::Validation(_) => "Validation Error",
            LinkFormError::Gateway(_) => "Gateway Error",
            LinkFormError::Clipboard(_) => "Clipboard Error",
            LinkFormError::Navigation(_) => "Navigation Error",
            LinkFormError::Config(_) => "Configuration Error",
            LinkFormError::Terminal(_) => "Terminal Error",
            LinkFormError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkFormError::Validation(msg) => msg,
            LinkFormError::Gateway(msg) => msg,
            LinkFormError::Clipboard(msg) => msg,
            LinkFormError::Navigation(msg) => msg,
            LinkFormError::Config(msg) => msg,
            LinkFormError::Terminal(msg) => msg,
            LinkFormError::Serialization(msg) => msg,
        }
    }

    /// 格式化为彩色输出（终端恢复之后打印到 stderr）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkFormError {}

// 便捷的构造函数
impl LinkFormError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkFormError::Validation(msg.into())
    }

    pub fn gateway<T: Into<String>>(msg: T) -> Self {
        LinkFormError::Gateway(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        LinkFormError::Clipboard(msg.into())
    }

    pub fn navigation<T: Into<String>>(msg: T) -> Self {
        LinkFormError::Navigation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkFormError::Config(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        LinkFormError::Terminal(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkFormError::Serialization(msg.into())
    }
}

impl From<ClientError> for LinkFormError {
    fn from(err: ClientError) -> Self {
        LinkFormError::Gateway(err.to_string())
    }
}

impl From<std::io::Error> for LinkFormError {
    fn from(err: std::io::Error) -> Self {
        LinkFormError::Terminal(err.to_string())
    }
}

impl From<serde_json::Error> for LinkFormError {
    fn from(err: serde_json::Error) -> Self {
        LinkFormError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for LinkFormError {
    fn from(err: config::ConfigError) -> Self {
        LinkFormError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkFormError>;
