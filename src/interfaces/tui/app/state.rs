//! App state definition and basic state management

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};

use crate::client::{HttpGateway, ShortenRequest, ShortenerGateway};
use crate::config::UiConfig;
use crate::services::{
    ClipboardWriter, FormState, Navigator, PendingRedirect, RedirectService, ShortenService,
    SystemBrowser, SystemClipboard, ToastQueue,
};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Form,
    Help,
    Exiting,
}

/// 当前获得焦点的表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    #[default]
    LongUrl,
    ExpirationDate,
    ExpirationTime,
    /// Only reachable once a short URL is displayed
    ShortUrl,
}

impl FocusField {
    const ALL: [Self; 4] = [
        Self::LongUrl,
        Self::ExpirationDate,
        Self::ExpirationTime,
        Self::ShortUrl,
    ];

    fn cycle_len(has_short_url: bool) -> usize {
        if has_short_url {
            Self::ALL.len()
        } else {
            Self::ALL.len() - 1
        }
    }

    /// 切换到下一个字段
    pub fn next(self, has_short_url: bool) -> Self {
        let len = Self::cycle_len(has_short_url);
        let idx = Self::ALL.iter().position(|x| *x == self).unwrap_or(0);
        Self::ALL[(idx + 1) % len]
    }

    /// 切换到上一个字段
    pub fn prev(self, has_short_url: bool) -> Self {
        let len = Self::cycle_len(has_short_url);
        let idx = Self::ALL.iter().position(|x| *x == self).unwrap_or(0).min(len - 1);
        if idx == 0 { Self::ALL[len - 1] } else { Self::ALL[idx - 1] }
    }
}

/// Work queued by a key press or by mount, run by the main loop after the
/// next repaint so the screen reflects the in-flight state first
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Submit(ShortenRequest),
    Resolve(String),
    Navigate(PendingRedirect),
}

pub struct App {
    pub form: FormState,
    pub focus: FocusField,
    pub current_screen: CurrentScreen,
    pub toasts: ToastQueue,
    pub pending: Option<PendingAction>,
    pub should_quit: bool,
    /// Page location the app was launched with
    pub location: Option<String>,
    /// Set once the redirect hand-off succeeded
    pub navigated_to: Option<String>,

    pub(super) shorten: ShortenService,
    pub(super) redirect: RedirectService,
    pub(super) clipboard: Box<dyn ClipboardWriter>,
    pub(super) navigator: Box<dyn Navigator>,
    pub(super) toast_ttl: Duration,
    pub(super) mounted: bool,
    today: Option<NaiveDate>,
}

impl App {
    /// App wired to the real gateway, clipboard and browser
    pub fn new(location: Option<String>, ui_config: &UiConfig) -> Self {
        let gateway: Arc<dyn ShortenerGateway> = Arc::new(HttpGateway::from_constants());
        let mut app = Self::with_parts(
            gateway,
            Box::new(SystemClipboard::new()),
            Box::new(SystemBrowser),
            location,
        );
        app.toast_ttl = Duration::from_millis(ui_config.toast_duration_ms);
        app
    }

    pub fn with_parts(
        gateway: Arc<dyn ShortenerGateway>,
        clipboard: Box<dyn ClipboardWriter>,
        navigator: Box<dyn Navigator>,
        location: Option<String>,
    ) -> Self {
        Self {
            form: FormState::new(),
            focus: FocusField::default(),
            current_screen: CurrentScreen::Form,
            toasts: ToastQueue::new(),
            pending: None,
            should_quit: false,
            location,
            navigated_to: None,
            shorten: ShortenService::new(gateway.clone()),
            redirect: RedirectService::new(gateway),
            clipboard,
            navigator,
            toast_ttl: Duration::from_millis(UiConfig::default().toast_duration_ms),
            mounted: false,
            today: None,
        }
    }

    /// Replace the redirect delay
    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        let gateway = self.shorten.gateway();
        self.redirect = RedirectService::with_delay(gateway, delay);
        self
    }

    /// Pin "today" for the date picker
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// 本地日期，决定日期选择器的下限
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn has_short_url(&self) -> bool {
        self.form.short_url.is_some()
    }

    /// 切换到下一个字段
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(self.has_short_url());
    }

    /// 切换到上一个字段
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev(self.has_short_url());
    }
}
