//! Submission flow
//!
//! `begin` validates and moves the form into `Submitting`; `finish` applies
//! the gateway result. The split lets a UI repaint "Shortening..." between
//! the two. [`ShortenService::submit`] runs the whole thing in one go.

use std::sync::Arc;

use tracing::{info, warn};

use super::form_state::{FormState, SubmitState};
use super::notification::{Notifier, Toast};
use crate::client::{ClientError, ShortenRequest, ShortenerGateway};
use crate::config::constants::{SHORT_CODE_PARAM, SHORT_LINK_DOMAIN};
use crate::utils::url_validator::{UrlValidationError, validate_url};

pub struct ShortenService {
    gateway: Arc<dyn ShortenerGateway>,
    domain: String,
}

impl ShortenService {
    pub fn new(gateway: Arc<dyn ShortenerGateway>) -> Self {
        Self::with_domain(gateway, SHORT_LINK_DOMAIN)
    }

    pub fn with_domain(gateway: Arc<dyn ShortenerGateway>, domain: impl Into<String>) -> Self {
        Self {
            gateway,
            domain: domain.into(),
        }
    }

    pub fn gateway(&self) -> Arc<dyn ShortenerGateway> {
        Arc::clone(&self.gateway)
    }

    /// `<domain>/?u=<token>`, token percent-encoded
    pub fn build_short_url(&self, token: &str) -> String {
        format!(
            "{}/?{}={}",
            self.domain.trim_end_matches('/'),
            SHORT_CODE_PARAM,
            urlencoding::encode(token)
        )
    }

    /// Validate the form and enter `Submitting`.
    ///
    /// Returns the request to send, or `None` when the submission was
    /// rejected (a toast explains why) or one is already in flight.
    pub fn begin(&self, form: &mut FormState, notifier: &mut dyn Notifier) -> Option<ShortenRequest> {
        if form.is_submitting() {
            return None;
        }

        if let Err(e) = validate_url(&form.long_url) {
            if !matches!(e, UrlValidationError::Empty) {
                warn!("Rejected long URL '{}': {}", form.long_url, e);
            }
            notifier.notify(Toast::error(e.user_message()));
            return None;
        }

        form.submit_state = SubmitState::Submitting;
        Some(ShortenRequest::new(
            form.long_url.trim(),
            form.expiration_timestamp(),
        ))
    }

    /// Apply the gateway result and leave `Submitting`
    pub fn finish(
        &self,
        form: &mut FormState,
        result: Result<String, ClientError>,
        notifier: &mut dyn Notifier,
    ) {
        match result {
            Ok(token) => {
                let short_url = self.build_short_url(&token);
                info!("Shortened '{}' to {}", form.long_url, short_url);
                form.short_url = Some(short_url);
                form.submit_state = SubmitState::Succeeded;
                notifier.notify(Toast::success("Success!", "Your URL has been shortened"));
            }
            Err(e) => {
                warn!("Failed to shorten '{}': {}", form.long_url, e);
                form.submit_state = SubmitState::Failed;
                notifier.notify(Toast::error("Failed to shorten URL"));
            }
        }
    }

    /// Send a request produced by [`Self::begin`]
    pub async fn send(&self, request: &ShortenRequest) -> Result<String, ClientError> {
        self.gateway.create_short_url(request).await
    }

    /// Full submission: validate, create, display
    pub async fn submit(&self, form: &mut FormState, notifier: &mut dyn Notifier) -> SubmitState {
        if let Some(request) = self.begin(form, notifier) {
            let result = self.send(&request).await;
            self.finish(form, result, notifier);
        }
        form.submit_state
    }
}
