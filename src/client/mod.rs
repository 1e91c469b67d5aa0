//! Gateway client layer
//!
//! The shortening API is an external collaborator with exactly two calls:
//! creation (`POST ?long_url=...`) and resolution (`GET ?short_url=...`).
//! Everything above this layer talks to [`ShortenerGateway`] so the form
//! flows can run against an in-memory fake in tests.
//!
//! # Architecture
//!
//! ```text
//! Services → ShortenerGateway ──→ HttpGateway (ureq, blocking pool)
//!                              └→ test fakes
//! ```

mod http_client;
mod models;

pub use http_client::HttpGateway;
pub use models::{ResolveResponse, ShortenResponse};

use std::fmt;

use async_trait::async_trait;

// ============ Request / outcome types ============

/// Outbound creation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenRequest {
    /// Long URL as typed by the user (encoded when the request line is built)
    pub long_url: String,
    /// Expiration instant in Unix epoch seconds (UTC)
    pub expiration: Option<i64>,
}

impl ShortenRequest {
    pub fn new(long_url: impl Into<String>, expiration: Option<i64>) -> Self {
        Self {
            long_url: long_url.into(),
            expiration,
        }
    }
}

/// Result of resolving a short code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The code maps to this long URL
    Redirect(String),
    /// The gateway reported the code as expired
    Expired,
    /// Neither a long URL nor an expiry signal came back
    NotFound,
}

// ============ ClientError ============

/// Errors from the gateway client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Connection, DNS, TLS or timeout failure
    Transport(String),
    /// Non-success HTTP status
    Status { code: u16, body: String },
    /// Response body was not the expected JSON
    Decode(String),
    /// Creation succeeded at HTTP level but carried no token
    MissingToken,
    /// Gateway reported an error inside a 2xx payload
    Rejected { code: u16, message: String },
    /// The blocking request task panicked or was cancelled
    TaskFailed(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ClientError::Status { code, body } => {
                write!(f, "Gateway returned HTTP {}: {}", code, body)
            }
            ClientError::Decode(msg) => write!(f, "Invalid gateway response: {}", msg),
            ClientError::MissingToken => write!(f, "Gateway response carried no short token"),
            ClientError::Rejected { code, message } => {
                write!(f, "Gateway rejected request ({}): {}", code, message)
            }
            ClientError::TaskFailed(msg) => write!(f, "Request task failed: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

// ============ Gateway trait ============

/// The two calls the form makes against the shortening API
#[async_trait]
pub trait ShortenerGateway: Send + Sync {
    /// Create a short link and return its token
    async fn create_short_url(&self, request: &ShortenRequest) -> Result<String, ClientError>;

    /// Look up the long URL behind a token
    async fn resolve_short_url(&self, short_code: &str) -> Result<Resolution, ClientError>;
}
