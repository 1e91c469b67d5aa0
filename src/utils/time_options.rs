//! Expiration time helpers
//!
//! The form offers a calendar date plus a half-hour time-of-day slot; the
//! pair is always interpreted as UTC.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

use crate::config::constants::DEFAULT_EXPIRATION_TIME;

/// Number of selectable time slots (every 30 minutes, 00:00–23:30)
pub const SLOTS_PER_DAY: usize = 48;

const MINUTES_PER_SLOT: u16 = 30;
const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day with minute precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// 按半小时槽位构造，超出范围时回绕
    pub fn from_slot(slot: usize) -> Self {
        let minutes = (slot % SLOTS_PER_DAY) as u16 * MINUTES_PER_SLOT;
        Self::from_minutes(minutes)
    }

    fn from_minutes(minutes: u16) -> Self {
        let minutes = minutes % MINUTES_PER_DAY;
        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }

    fn minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Slot index, if this time sits exactly on a half-hour boundary
    pub fn slot(&self) -> Option<usize> {
        let m = self.minutes();
        (m % MINUTES_PER_SLOT == 0).then_some((m / MINUTES_PER_SLOT) as usize)
    }

    /// 下一个半小时槽位（23:30 之后回到 00:00）
    pub fn next_slot(self) -> Self {
        let next = self.minutes() / MINUTES_PER_SLOT + 1;
        Self::from_slot(next as usize)
    }

    /// 上一个半小时槽位（00:00 之前回到 23:30）
    pub fn prev_slot(self) -> Self {
        let m = self.minutes();
        let current = m.div_ceil(MINUTES_PER_SLOT) as usize;
        Self::from_slot(current + SLOTS_PER_DAY - 1)
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour as u32, self.minute as u32, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        let (hour, minute) = DEFAULT_EXPIRATION_TIME;
        Self::new(hour, minute).unwrap_or(Self { hour: 0, minute: 0 })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    /// Parses `HH:MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| format!("Invalid time '{}', expected HH:MM", s))?;
        let hour: u8 = h
            .parse()
            .map_err(|_| format!("Invalid hour in '{}'", s))?;
        let minute: u8 = m
            .parse()
            .map_err(|_| format!("Invalid minute in '{}'", s))?;
        Self::new(hour, minute).ok_or_else(|| format!("Time out of range: '{}'", s))
    }
}

/// All selectable times, 00:00 through 23:30
pub fn time_options() -> Vec<TimeOfDay> {
    (0..SLOTS_PER_DAY).map(TimeOfDay::from_slot).collect()
}

/// Combine a calendar date and time of day as a UTC instant
pub fn expiration_datetime(date: NaiveDate, time: TimeOfDay) -> DateTime<Utc> {
    date.and_time(time.to_naive_time()).and_utc()
}

/// Unix epoch seconds of the UTC instant `date` + `time`
pub fn expiration_timestamp(date: NaiveDate, time: TimeOfDay) -> i64 {
    expiration_datetime(date, time).timestamp()
}

/// First date the picker accepts: anything before tomorrow is already in the past
pub fn earliest_expiration_date(today: NaiveDate) -> NaiveDate {
    today.succ_opt().unwrap_or(today)
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// `October 19th, 2026`
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

/// `October 19th, 2026 at 12:00 UTC`
pub fn format_expiration(date: NaiveDate, time: TimeOfDay) -> String {
    format!("{} at {} UTC", format_long_date(date), time)
}
