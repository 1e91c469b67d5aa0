//! Toast notifications
//!
//! Every outcome the user needs to see (validation errors, failures,
//! success, copy confirmation) is a [`Toast`] pushed into a [`Notifier`].

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::debug;

/// Maximum number of toasts kept around
pub const TOAST_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: Option<String>,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: Some("Error".to_string()),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    /// Untitled informational toast
    pub fn info(description: impl Into<String>) -> Self {
        Self {
            title: None,
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }

    /// `Title: description`, or just the description
    pub fn text(&self) -> String {
        match &self.title {
            Some(title) => format!("{}: {}", title, self.description),
            None => self.description.clone(),
        }
    }
}

/// Sink for user-visible notifications
pub trait Notifier {
    fn notify(&mut self, toast: Toast);
}

/// 带过期时间的 toast 队列
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<(Toast, Instant)>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back().map(|(t, _)| t)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().map(|(t, _)| t)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Drop toasts shown for longer than `ttl`
    pub fn prune(&mut self, now: Instant, ttl: Duration) {
        self.toasts
            .retain(|(_, shown_at)| now.saturating_duration_since(*shown_at) < ttl);
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, toast: Toast) {
        debug!("Toast: {}", toast.text());
        if self.toasts.len() == TOAST_LIMIT {
            self.toasts.pop_front();
        }
        self.toasts.push_back((toast, Instant::now()));
    }
}
