//! Time windows and the preset reporting periods.
//!
//! All calendar arithmetic here is done in UTC. A window's bounds are
//! inclusive on both ends; a missing bound means unbounded on that side.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::ActivityEvent;

/// An inclusive time range with optional bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl TimeWindow {
    /// A window with no bounds.
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// A window bounded on both sides.
    pub const fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// A window open towards the future.
    pub const fn since(start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// A window open towards the past.
    pub const fn until(end: DateTime<Utc>) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// The last `minutes` minutes up to and including `now`.
    ///
    /// Negative values are treated as zero.
    pub fn trailing_minutes(now: DateTime<Utc>, minutes: i64) -> Self {
        let minutes = minutes.max(0);
        let start = Duration::try_minutes(minutes)
            .and_then(|span| now.checked_sub_signed(span))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self::between(start, now)
    }

    /// Returns true if `ts` lies inside the window (inclusive).
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start.is_none_or(|start| ts >= start) && self.end.is_none_or(|end| ts <= end)
    }

    /// Returns the events inside the window, sorted ascending by timestamp.
    ///
    /// The sort is stable, so events sharing a timestamp keep their input order.
    pub fn select<'a, E: ActivityEvent>(&self, events: &'a [E]) -> Vec<&'a E> {
        let mut selected: Vec<&E> = events
            .iter()
            .filter(|event| self.contains(event.timestamp()))
            .collect();
        selected.sort_by_key(|event| event.timestamp());
        selected
    }

    /// Every UTC calendar date from the start's date to the end's date, inclusive.
    ///
    /// Returns an empty list if either bound is missing or the window is inverted.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Vec::new();
        };
        let last = end.date_naive();
        start
            .date_naive()
            .iter_days()
            .take_while(|date| *date <= last)
            .collect()
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |b: Option<DateTime<Utc>>| b.map_or_else(|| "*".to_string(), |t| t.to_rfc3339());
        write!(f, "[{}, {}]", bound(self.start), bound(self.end))
    }
}

/// Preset reporting periods for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "today")]
    Today,
    #[default]
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
}

impl Period {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Last7Days => "7d",
            Self::Last30Days => "30d",
        }
    }

    /// Human label used in report headers.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
        }
    }

    const fn days_back(self) -> i64 {
        match self {
            Self::Today => 0,
            Self::Last7Days => 7,
            Self::Last30Days => 30,
        }
    }

    /// Resolves the period to a window ending at `now`.
    ///
    /// The window starts at UTC midnight of the day `days_back` days before `now`.
    pub fn window(self, now: DateTime<Utc>) -> TimeWindow {
        let first_day = now.date_naive() - Duration::days(self.days_back());
        let start = first_day.and_time(NaiveTime::MIN).and_utc();
        TimeWindow::between(start, now)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for unrecognised period names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown period: {0} (expected today, 7d or 30d)")]
pub struct UnknownPeriod(String);

impl FromStr for Period {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "7d" => Ok(Self::Last7Days),
            "30d" => Ok(Self::Last30Days),
            _ => Err(UnknownPeriod(s.to_string())),
        }
    }
}
