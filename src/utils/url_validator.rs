//! 长链接输入校验
//!
//! 表单提交与跳转前共用：只放行带主机名的 http/https 地址。

use std::fmt;

use url::Url;

/// Schemes refused outright, even though they parse as URLs
const BLOCKED_SCHEMES: &[&str] = &["javascript", "data", "file", "vbscript", "about", "blob"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    Empty,
    /// Script or local-resource scheme
    Blocked(String),
    /// Any other non-web scheme, or none at all
    NotWeb(String),
    Malformed(String),
}

impl UrlValidationError {
    /// Toast text shown under the URL field
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Empty => "Please enter a URL",
            Self::NotWeb(_) => "URL must start with http:// or https://",
            Self::Blocked(_) => "This URL protocol is not allowed",
            Self::Malformed(_) => "Please enter a valid URL",
        }
    }
}

impl fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty URL"),
            Self::Blocked(scheme) => write!(f, "blocked scheme '{}'", scheme),
            Self::NotWeb(scheme) if scheme.is_empty() => write!(f, "missing scheme"),
            Self::NotWeb(scheme) => write!(f, "unsupported scheme '{}'", scheme),
            Self::Malformed(reason) => write!(f, "malformed URL: {}", reason),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// Lower-cased text before the first `:` when it is shaped like a scheme
fn leading_scheme(input: &str) -> Option<String> {
    let (head, _) = input.split_once(':')?;
    let mut chars = head.chars();
    let well_formed = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    well_formed.then(|| head.to_ascii_lowercase())
}

/// Check the text typed into the long-URL field
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let scheme = leading_scheme(input).unwrap_or_default();
    if BLOCKED_SCHEMES.contains(&scheme.as_str()) {
        return Err(UrlValidationError::Blocked(scheme));
    }
    if scheme != "http" && scheme != "https" {
        return Err(UrlValidationError::NotWeb(scheme));
    }

    let parsed = Url::parse(input).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::Malformed("no host".into()));
    }
    Ok(())
}
