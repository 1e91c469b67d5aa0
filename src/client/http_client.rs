//! HTTP gateway implementation
//!
//! Uses a shared ureq [`Agent`]; each call runs on tokio's blocking pool so
//! the UI loop only ever awaits a join handle.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace, warn};
use ureq::Agent;

use super::models::{ResolveResponse, ShortenResponse};
use super::{ClientError, Resolution, ShortenRequest, ShortenerGateway};
use crate::config::constants::{GATEWAY_ENDPOINT, HTTP_TIMEOUT_SECS};

/// Raw status + body pair returned by the blocking helpers
type RawResponse = (u16, String);

pub struct HttpGateway {
    endpoint: String,
    agent: Agent,
}

impl HttpGateway {
    /// 创建指向指定网关地址的客户端
    pub fn new(endpoint: impl Into<String>) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))
            // Status codes are inspected by hand: the expiry signal may ride on a 400
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            endpoint: endpoint.into(),
            agent,
        }
    }

    /// Client for the compiled-in gateway endpoint
    pub fn from_constants() -> Self {
        Self::new(GATEWAY_ENDPOINT)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn query_separator(&self) -> char {
        if self.endpoint.contains('?') { '&' } else { '?' }
    }

    /// `POST <gateway>?long_url=<encoded>[&expiration=<epoch>]`
    pub fn creation_url(&self, request: &ShortenRequest) -> String {
        let mut url = format!(
            "{}{}long_url={}",
            self.endpoint,
            self.query_separator(),
            urlencoding::encode(&request.long_url)
        );
        if let Some(expiration) = request.expiration {
            url.push_str(&format!("&expiration={}", expiration));
        }
        url
    }

    /// `GET <gateway>?short_url=<token>`
    pub fn resolution_url(&self, short_code: &str) -> String {
        format!(
            "{}{}short_url={}",
            self.endpoint,
            self.query_separator(),
            urlencoding::encode(short_code)
        )
    }

    fn post_sync(agent: Agent, url: String) -> Result<RawResponse, ClientError> {
        let mut resp = agent
            .post(&url)
            .send_empty()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .body_mut()
            .read_to_string()
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok((status, body))
    }

    fn get_sync(agent: Agent, url: String) -> Result<RawResponse, ClientError> {
        let mut resp = agent
            .get(&url)
            .call()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .body_mut()
            .read_to_string()
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok((status, body))
    }

    /// 在阻塞线程池中执行同步请求
    async fn run_blocking<F>(f: F) -> Result<RawResponse, ClientError>
    where
        F: FnOnce() -> Result<RawResponse, ClientError> + Send + 'static,
    {
        tokio::task::spawn_blocking(f)
            .await
            .map_err(|e| ClientError::TaskFailed(e.to_string()))?
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Interpret a creation response
pub(crate) fn parse_creation(status: u16, body: &str) -> Result<String, ClientError> {
    if !is_success(status) {
        return Err(ClientError::Status {
            code: status,
            body: body.to_string(),
        });
    }
    let parsed: ShortenResponse = serde_json::from_str(body)?;
    parsed.into_token()
}

/// Interpret a resolution response
pub(crate) fn parse_resolution(status: u16, body: &str) -> Result<Resolution, ClientError> {
    let parsed: Option<ResolveResponse> = if body.trim().is_empty() {
        None
    } else {
        serde_json::from_str(body).ok()
    };

    // The expiry signal wins regardless of the HTTP status it arrived with
    if let Some(resp) = &parsed
        && resp.is_expired()
    {
        return Ok(Resolution::Expired);
    }

    if status == 404 {
        return Ok(Resolution::NotFound);
    }

    if !is_success(status) {
        return Err(ClientError::Status {
            code: status,
            body: body.to_string(),
        });
    }

    match parsed {
        Some(resp) => Ok(resp.into_resolution()),
        None if body.trim().is_empty() => Ok(Resolution::NotFound),
        None => Err(ClientError::Decode(format!(
            "unexpected resolution body: {}",
            body
        ))),
    }
}

#[async_trait]
impl ShortenerGateway for HttpGateway {
    async fn create_short_url(&self, request: &ShortenRequest) -> Result<String, ClientError> {
        let url = self.creation_url(request);
        debug!(
            "Creating short URL (expiration: {:?}) via {}",
            request.expiration, self.endpoint
        );

        let agent = self.agent.clone();
        let (status, body) = Self::run_blocking(move || Self::post_sync(agent, url)).await?;
        trace!("Creation response {}: {}", status, body);

        parse_creation(status, &body).inspect_err(|e| warn!("Short URL creation failed: {}", e))
    }

    async fn resolve_short_url(&self, short_code: &str) -> Result<Resolution, ClientError> {
        let url = self.resolution_url(short_code);
        debug!("Resolving short code '{}'", short_code);

        let agent = self.agent.clone();
        let (status, body) = Self::run_blocking(move || Self::get_sync(agent, url)).await?;
        trace!("Resolution response {}: {}", status, body);

        parse_resolution(status, &body)
            .inspect_err(|e| warn!("Short code '{}' resolution failed: {}", short_code, e))
    }
}
