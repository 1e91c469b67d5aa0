//! 表单状态管理
//!
//! The transient state of the shortening form. Nothing here survives a
//! restart.

use chrono::{NaiveDate, TimeDelta};

use crate::utils::TimeOfDay;
use crate::utils::time_options::{
    earliest_expiration_date, expiration_timestamp, format_expiration,
};

/// Submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Redirect lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RedirectState {
    #[default]
    Idle,
    /// Resolution request in flight
    Resolving,
    /// Long URL known, indicator is showing until navigation
    Redirecting { target: String },
    /// Expired, not found, or the lookup failed
    Failed,
}

/// 表单状态
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub long_url: String,
    pub expiration_date: Option<NaiveDate>,
    pub expiration_time: TimeOfDay,
    pub short_url: Option<String>,
    pub submit_state: SubmitState,
    pub redirect_state: RedirectState,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_state == SubmitState::Submitting
    }

    pub fn is_redirecting(&self) -> bool {
        matches!(self.redirect_state, RedirectState::Redirecting { .. })
    }

    /// Target of an in-progress redirect
    pub fn redirect_target(&self) -> Option<&str> {
        match &self.redirect_state {
            RedirectState::Redirecting { target } => Some(target),
            _ => None,
        }
    }

    /// Epoch seconds of the picked expiration, if a date was picked
    pub fn expiration_timestamp(&self) -> Option<i64> {
        self.expiration_date
            .map(|date| expiration_timestamp(date, self.expiration_time))
    }

    /// `Expires: ...` preview text
    pub fn expiration_label(&self) -> Option<String> {
        self.expiration_date
            .map(|date| format!("Expires: {}", format_expiration(date, self.expiration_time)))
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Shortening..."
        } else {
            "Shorten URL"
        }
    }

    /// Pick an expiration date; dates before tomorrow are refused
    pub fn pick_date(&mut self, date: NaiveDate, today: NaiveDate) -> bool {
        if date < earliest_expiration_date(today) {
            return false;
        }
        self.expiration_date = Some(date);
        true
    }

    /// Move the picked date by `days`, clamping at the earliest allowed date.
    /// With no date picked yet this picks the earliest allowed date.
    pub fn shift_date(&mut self, days: i64, today: NaiveDate) {
        let earliest = earliest_expiration_date(today);
        let next = match self.expiration_date {
            None => earliest,
            Some(date) => date
                .checked_add_signed(TimeDelta::days(days))
                .unwrap_or(date)
                .max(earliest),
        };
        self.expiration_date = Some(next);
    }

    pub fn clear_expiration_date(&mut self) {
        self.expiration_date = None;
    }

    /// The time selector is disabled until a date is picked
    pub fn time_selectable(&self) -> bool {
        self.expiration_date.is_some()
    }

    pub fn next_time(&mut self) {
        if self.time_selectable() {
            self.expiration_time = self.expiration_time.next_slot();
        }
    }

    pub fn prev_time(&mut self) {
        if self.time_selectable() {
            self.expiration_time = self.expiration_time.prev_slot();
        }
    }
}
