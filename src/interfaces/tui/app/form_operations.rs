//! Form operations: submit, copy, redirect and date/time editing

use std::time::Instant;

use tracing::debug;

use super::state::{App, PendingAction};
use crate::services::{RedirectOutcome, copy_short_url};

impl App {
    /// Start the redirect flow from the launch location. Runs at most once.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        if let Some(code) = self.redirect.begin(&mut self.form, self.location.as_deref()) {
            debug!("Launch location carries short code '{}'", code);
            self.pending = Some(PendingAction::Resolve(code));
        }
    }

    /// Validate the form and queue the creation request
    pub fn request_submit(&mut self) {
        if self.pending.is_some() {
            return;
        }
        if let Some(request) = self.shorten.begin(&mut self.form, &mut self.toasts) {
            self.pending = Some(PendingAction::Submit(request));
        }
    }

    pub fn copy_short_url(&mut self) -> bool {
        copy_short_url(&self.form, self.clipboard.as_mut(), &mut self.toasts)
    }

    /// Run the queued action, if any
    pub async fn run_pending(&mut self) {
        let Some(action) = self.pending.take() else {
            return;
        };

        match action {
            PendingAction::Submit(request) => {
                let result = self.shorten.send(&request).await;
                self.shorten.finish(&mut self.form, result, &mut self.toasts);
                if self.has_short_url() {
                    debug!("Short URL ready: {:?}", self.form.short_url);
                }
            }
            PendingAction::Resolve(code) => {
                let result = self.redirect.resolve(&code).await;
                if let RedirectOutcome::Pending(pending) =
                    self.redirect
                        .apply(&mut self.form, &code, result, &mut self.toasts)
                {
                    self.pending = Some(PendingAction::Navigate(pending));
                }
            }
            PendingAction::Navigate(pending) => {
                tokio::time::sleep_until(tokio::time::Instant::from_std(pending.due)).await;
                let outcome = self.redirect.complete(
                    &mut self.form,
                    &pending,
                    self.navigator.as_mut(),
                    &mut self.toasts,
                );
                if let RedirectOutcome::Navigated(target) = outcome {
                    self.navigated_to = Some(target);
                    self.should_quit = true;
                }
            }
        }
    }

    /// Periodic housekeeping: expire old notifications
    pub fn on_tick(&mut self) {
        self.toasts.prune(Instant::now(), self.toast_ttl);
    }

    // ============ Date / time picker ============

    pub fn shift_date(&mut self, days: i64) {
        let today = self.today();
        self.form.shift_date(days, today);
    }

    pub fn clear_date(&mut self) {
        self.form.clear_expiration_date();
    }

    pub fn next_time(&mut self) {
        self.form.next_time();
    }

    pub fn prev_time(&mut self) {
        self.form.prev_time();
    }

    // ============ Long URL input ============

    pub fn push_char(&mut self, c: char) {
        if !self.form.is_submitting() {
            self.form.long_url.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if !self.form.is_submitting() {
            self.form.long_url.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::*;
    use crate::client::{ClientError, Resolution, ShortenRequest, ShortenerGateway};
    use crate::errors::Result;
    use crate::services::{ClipboardWriter, Navigator};

    struct StaticGateway;

    #[async_trait]
    impl ShortenerGateway for StaticGateway {
        async fn create_short_url(
            &self,
            _request: &ShortenRequest,
        ) -> std::result::Result<String, ClientError> {
            Ok("abc123".to_string())
        }

        async fn resolve_short_url(
            &self,
            _short_code: &str,
        ) -> std::result::Result<Resolution, ClientError> {
            Ok(Resolution::Redirect("https://example.com".to_string()))
        }
    }

    struct NullClipboard;

    impl ClipboardWriter for NullClipboard {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            Ok(())
        }
    }

    struct NullNavigator;

    impl Navigator for NullNavigator {
        fn navigate(&mut self, _url: &str) -> Result<()> {
            Ok(())
        }
    }

    fn app(location: Option<&str>) -> App {
        App::with_parts(
            Arc::new(StaticGateway),
            Box::new(NullClipboard),
            Box::new(NullNavigator),
            location.map(str::to_string),
        )
        .with_redirect_delay(std::time::Duration::ZERO)
        .with_today(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    #[test]
    fn test_mount_without_code_queues_nothing() {
        let mut app = app(None);
        app.mount();
        assert!(app.pending.is_none());
    }

    #[test]
    fn test_mount_queues_resolve_once() {
        let mut app = app(Some("https://short.url/?u=abc123"));
        app.mount();
        assert_eq!(app.pending, Some(PendingAction::Resolve("abc123".into())));

        app.pending = None;
        app.mount();
        assert!(app.pending.is_none());
    }

    #[test]
    fn test_submit_with_empty_url_queues_nothing() {
        let mut app = app(None);
        app.request_submit();
        assert!(app.pending.is_none());
        assert_eq!(
            app.toasts.latest().map(|t| t.description.as_str()),
            Some("Please enter a URL")
        );
    }

    #[tokio::test]
    async fn test_submit_then_run_pending() {
        let mut app = app(None);
        app.form.long_url = "https://example.com".into();
        app.request_submit();
        assert!(app.form.is_submitting());

        app.run_pending().await;
        assert!(!app.form.is_submitting());
        assert_eq!(app.form.short_url.as_deref(), Some("https://short.url/?u=abc123"));
    }

    #[tokio::test]
    async fn test_redirect_quits_after_navigation() {
        let mut app = app(Some("u=abc123"));
        app.mount();
        app.run_pending().await;
        assert!(app.form.is_redirecting());
        assert!(matches!(app.pending, Some(PendingAction::Navigate(_))));

        app.run_pending().await;
        assert!(app.should_quit);
        assert_eq!(app.navigated_to.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_first_date_shift_picks_tomorrow() {
        let mut app = app(None);
        app.shift_date(1);
        assert_eq!(
            app.form.expiration_date,
            NaiveDate::from_ymd_opt(2026, 10, 20)
        );
    }
}
