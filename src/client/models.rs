//! Gateway wire models
//!
//! The gateway answers with loosely shaped JSON, so every field is optional
//! and the common spellings are each read on their own.

use serde::Deserialize;
use serde_json::Value;
use url::Url;

use super::{ClientError, Resolution};
use crate::config::constants::SHORT_CODE_PARAM;

/// Message the gateway uses for an expired short code
pub const EXPIRED_MESSAGE: &str = "URL expired";

/// Body of a successful creation call
///
/// Each token spelling is its own field so a body carrying several of them
/// (a code plus the full short URL, say) still decodes. Non-string values
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShortenResponse {
    #[serde(default)]
    short_code: Option<Value>,
    #[serde(default, rename = "shortCode")]
    short_code_camel: Option<Value>,
    #[serde(default)]
    short_url: Option<Value>,
    #[serde(default, rename = "shortUrl")]
    short_url_camel: Option<Value>,
    #[serde(default)]
    code: Option<Value>,
    #[serde(default, rename = "statusCode")]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ShortenResponse {
    /// First non-empty token, code spellings before URL spellings
    pub fn token(&self) -> Option<String> {
        [
            &self.short_code,
            &self.short_code_camel,
            &self.short_url,
            &self.short_url_camel,
            &self.code,
        ]
        .into_iter()
        .filter_map(|value| value.as_ref().and_then(Value::as_str))
        .map(str::trim)
        .find(|token| !token.is_empty())
        .and_then(token_from_link)
    }

    /// Extract the created token
    pub fn into_token(self) -> Result<String, ClientError> {
        if let Some(code) = self.status_code.filter(|c| *c >= 400) {
            return Err(ClientError::Rejected {
                code,
                message: self.message.unwrap_or_default(),
            });
        }

        self.token().ok_or(ClientError::MissingToken)
    }
}

/// A bare token passes through; a full short link yields its `u` parameter
/// or, failing that, its last path segment.
fn token_from_link(value: &str) -> Option<String> {
    let Ok(link) = Url::parse(value) else {
        return Some(value.to_string());
    };

    link.query_pairs()
        .find(|(key, _)| key == SHORT_CODE_PARAM)
        .map(|(_, token)| token.into_owned())
        .or_else(|| {
            link.path_segments()
                .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
                .map(str::to_string)
        })
        .filter(|token| !token.is_empty())
}

/// Body of a resolution call
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResolveResponse {
    #[serde(default, rename = "statusCode")]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    long_url: Option<Value>,
    #[serde(default, rename = "longUrl")]
    long_url_camel: Option<Value>,
}

impl ResolveResponse {
    /// 是否为过期信号：`{ statusCode: 400, message: "URL expired" }`
    pub fn is_expired(&self) -> bool {
        self.status_code == Some(400)
            && self
                .message
                .as_deref()
                .is_some_and(|m| m.trim().eq_ignore_ascii_case(EXPIRED_MESSAGE))
    }

    pub fn long_url(&self) -> Option<&str> {
        [&self.long_url, &self.long_url_camel]
            .into_iter()
            .filter_map(|value| value.as_ref().and_then(Value::as_str))
            .map(str::trim)
            .find(|url| !url.is_empty())
    }

    pub fn into_resolution(self) -> Resolution {
        if self.is_expired() {
            return Resolution::Expired;
        }
        match self.long_url() {
            Some(url) => Resolution::Redirect(url.to_string()),
            None => Resolution::NotFound,
        }
    }
}
