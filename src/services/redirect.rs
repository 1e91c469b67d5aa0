//! Redirect flow
//!
//! Runs once on mount: if the page location carries `?u=<token>`, resolve
//! the token and navigate to the long URL after a short delay so the
//! redirecting indicator gets a chance to render.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};
use url::Url;

use super::form_state::{FormState, RedirectState};
use super::navigation::Navigator;
use super::notification::{Notifier, Toast};
use crate::client::{ClientError, Resolution, ShortenerGateway};
use crate::config::constants::{REDIRECT_DELAY_MS, SHORT_CODE_PARAM};

/// Extract the short code from a page location.
///
/// Accepts a full URL (`https://short.url/?u=abc`), a bare query
/// (`?u=abc`) or a query without the leading `?` (`u=abc`).
pub fn short_code_from_location(location: &str) -> Option<String> {
    let location = location.trim();
    if location.is_empty() {
        return None;
    }

    let normalized = if !location.starts_with('?')
        && !location.contains("://")
        && !location.contains('/')
        && location.contains('=')
    {
        format!("?{}", location)
    } else {
        location.to_string()
    };

    let base = Url::parse("http://localhost/").ok()?;
    let url = Url::options().base_url(Some(&base)).parse(&normalized).ok()?;

    url.query_pairs()
        .find(|(key, _)| key == SHORT_CODE_PARAM)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// A resolved redirect waiting for its delay to elapse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRedirect {
    pub target: String,
    pub due: Instant,
}

impl PendingRedirect {
    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// No short code on the location, or the flow already ran
    Skipped,
    /// Resolved; navigation is due at `PendingRedirect::due`
    Pending(PendingRedirect),
    /// Handed off to the navigator
    Navigated(String),
    Expired,
    NotFound,
    Failed,
}

pub struct RedirectService {
    gateway: Arc<dyn ShortenerGateway>,
    delay: Duration,
}

impl RedirectService {
    pub fn new(gateway: Arc<dyn ShortenerGateway>) -> Self {
        Self::with_delay(gateway, Duration::from_millis(REDIRECT_DELAY_MS))
    }

    pub fn with_delay(gateway: Arc<dyn ShortenerGateway>, delay: Duration) -> Self {
        Self { gateway, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Read the short code and enter `Resolving`.
    ///
    /// Returns `None` without touching state when there is no code, and
    /// when the flow has already run for this form.
    pub fn begin(&self, form: &mut FormState, location: Option<&str>) -> Option<String> {
        if form.redirect_state != RedirectState::Idle {
            debug!("Redirect flow already ran, ignoring");
            return None;
        }

        let code = location.and_then(short_code_from_location)?;
        form.redirect_state = RedirectState::Resolving;
        Some(code)
    }

    pub async fn resolve(&self, short_code: &str) -> Result<Resolution, ClientError> {
        self.gateway.resolve_short_url(short_code).await
    }

    /// Apply the resolution result
    pub fn apply(
        &self,
        form: &mut FormState,
        short_code: &str,
        result: Result<Resolution, ClientError>,
        notifier: &mut dyn Notifier,
    ) -> RedirectOutcome {
        match result {
            Ok(Resolution::Redirect(target)) => {
                info!("Short code '{}' resolves to {}", short_code, target);
                form.redirect_state = RedirectState::Redirecting {
                    target: target.clone(),
                };
                RedirectOutcome::Pending(PendingRedirect {
                    target,
                    due: Instant::now() + self.delay,
                })
            }
            Ok(Resolution::Expired) => {
                info!("Short code '{}' has expired", short_code);
                form.redirect_state = RedirectState::Failed;
                notifier.notify(Toast::error("This short URL has expired"));
                RedirectOutcome::Expired
            }
            Ok(Resolution::NotFound) => {
                info!("Short code '{}' not found", short_code);
                form.redirect_state = RedirectState::Failed;
                notifier.notify(Toast::error("Short URL not found"));
                RedirectOutcome::NotFound
            }
            Err(e) => {
                warn!("Failed to resolve short code '{}': {}", short_code, e);
                form.redirect_state = RedirectState::Failed;
                notifier.notify(Toast::error("Failed to resolve short URL"));
                RedirectOutcome::Failed
            }
        }
    }

    /// Navigate to a pending redirect's target
    pub fn complete(
        &self,
        form: &mut FormState,
        pending: &PendingRedirect,
        navigator: &mut dyn Navigator,
        notifier: &mut dyn Notifier,
    ) -> RedirectOutcome {
        match navigator.navigate(&pending.target) {
            Ok(()) => {
                info!("Navigated to {}", pending.target);
                RedirectOutcome::Navigated(pending.target.clone())
            }
            Err(e) => {
                warn!("Navigation to {} failed: {}", pending.target, e);
                form.redirect_state = RedirectState::Failed;
                notifier.notify(Toast::error(format!("Could not open {}", pending.target)));
                RedirectOutcome::Failed
            }
        }
    }

    /// Whole flow: read code, resolve, wait, navigate
    pub async fn run(
        &self,
        form: &mut FormState,
        location: Option<&str>,
        navigator: &mut dyn Navigator,
        notifier: &mut dyn Notifier,
    ) -> RedirectOutcome {
        let Some(code) = self.begin(form, location) else {
            return RedirectOutcome::Skipped;
        };

        let result = self.resolve(&code).await;
        match self.apply(form, &code, result, notifier) {
            RedirectOutcome::Pending(pending) => {
                tokio::time::sleep_until(tokio::time::Instant::from_std(pending.due)).await;
                self.complete(form, &pending, navigator, notifier)
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_from_full_url() {
        assert_eq!(
            short_code_from_location("https://short.url/?u=abc123"),
            Some("abc123".into())
        );
        assert_eq!(
            short_code_from_location("https://short.url/?ref=x&u=abc123"),
            Some("abc123".into())
        );
    }

    #[test]
    fn test_code_from_bare_query() {
        assert_eq!(short_code_from_location("?u=abc123"), Some("abc123".into()));
        assert_eq!(short_code_from_location("u=abc123"), Some("abc123".into()));
        assert_eq!(
            short_code_from_location("short.url/?u=abc123"),
            Some("abc123".into())
        );
    }

    #[test]
    fn test_code_percent_decoded() {
        assert_eq!(short_code_from_location("?u=ab%2Dc"), Some("ab-c".into()));
    }

    #[test]
    fn test_no_code() {
        assert_eq!(short_code_from_location(""), None);
        assert_eq!(short_code_from_location("https://short.url/"), None);
        assert_eq!(short_code_from_location("?u="), None);
        assert_eq!(short_code_from_location("?url=abc"), None);
    }

    #[test]
    fn test_pending_remaining() {
        let now = Instant::now();
        let pending = PendingRedirect {
            target: "https://example.com".into(),
            due: now + Duration::from_millis(500),
        };
        assert_eq!(pending.remaining(now), Duration::from_millis(500));
        assert_eq!(
            pending.remaining(now + Duration::from_secs(1)),
            Duration::ZERO
        );
    }
}
