//! Active time broken down by an event attribute, overall and per day.
//!
//! Uses the same gap heuristic as [`crate::estimate_active_minutes`], with two
//! differences:
//!
//! - each counted gap is credited to the attribute value of the *earlier*
//!   event of the pair, and the last-event credit goes to the last event's value
//! - a window holding a single event earns the last-event credit (30 seconds),
//!   not the single-event credit
//!
//! Values whose total floors to zero minutes are dropped, except in the
//! single-event case where the one key is always reported.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, normalize_attribute};
use crate::estimate::gap_ms;
use crate::event::ActivityEvent;
use crate::heuristic::{HeuristicConfig, ms_to_minutes};
use crate::window::TimeWindow;

/// Active minutes per attribute value.
pub type Breakdown = BTreeMap<String, i64>;

/// The breakdown for one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBreakdown {
    pub date: NaiveDate,
    /// Empty when no events fell on this day.
    pub breakdown: Breakdown,
}

/// Active minutes per value of `attribute` for the events inside `window`.
///
/// Absent or blank values are grouped under `"Unknown"`.
pub fn breakdown_by_attribute<E: ActivityEvent>(
    events: &[E],
    window: &TimeWindow,
    attribute: Attribute,
    config: &HeuristicConfig,
) -> Breakdown {
    let sorted = window.select(events);
    let breakdown = breakdown_sorted(&sorted, attribute, config);
    tracing::debug!(%window, %attribute, events = sorted.len(), keys = breakdown.len(), "computed breakdown");
    breakdown
}

/// One [`DailyBreakdown`] per UTC date from `start` to `end`, oldest first.
///
/// Days without events are included with an empty breakdown. Each day is
/// computed on its own events only, so no gap crosses midnight.
pub fn time_series_by_attribute<E: ActivityEvent>(
    events: &[E],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    attribute: Attribute,
    config: &HeuristicConfig,
) -> Vec<DailyBreakdown> {
    let window = TimeWindow::between(start, end);

    let mut by_date: BTreeMap<NaiveDate, Vec<&E>> = BTreeMap::new();
    for event in window.select(events) {
        by_date
            .entry(event.timestamp().date_naive())
            .or_default()
            .push(event);
    }

    let series: Vec<DailyBreakdown> = window
        .dates()
        .into_iter()
        .map(|date| DailyBreakdown {
            date,
            breakdown: by_date
                .get(&date)
                .map_or_else(Breakdown::new, |day| breakdown_sorted(day, attribute, config)),
        })
        .collect();

    tracing::debug!(%window, %attribute, days = series.len(), active_days = by_date.len(), "computed time series");
    series
}

/// Breakdown over events already filtered and sorted ascending.
fn breakdown_sorted<'a, E: ActivityEvent>(
    sorted: &[&'a E],
    attribute: Attribute,
    config: &HeuristicConfig,
) -> Breakdown {
    let mut breakdown = Breakdown::new();

    let Some(&last) = sorted.last() else {
        return breakdown;
    };

    if sorted.len() == 1 {
        let value = normalize_attribute(last.attribute(attribute));
        breakdown.insert(value.to_string(), ms_to_minutes(config.last_credit()));
        return breakdown;
    }

    let mut ms_by_value: HashMap<&'a str, i64> = HashMap::new();

    for pair in sorted.windows(2) {
        let (prev, curr): (&'a E, &'a E) = (pair[0], pair[1]);
        let gap = gap_ms(prev, curr);
        if gap > config.idle_timeout_ms {
            tracing::trace!(gap_ms = gap, "idle gap skipped");
            continue;
        }
        let value = normalize_attribute(prev.attribute(attribute));
        let total = ms_by_value.entry(value).or_insert(0);
        *total = total.saturating_add(gap);
    }

    let last_value = normalize_attribute(last.attribute(attribute));
    let total = ms_by_value.entry(last_value).or_insert(0);
    *total = total.saturating_add(config.last_credit());

    breakdown.extend(
        ms_by_value
            .into_iter()
            .map(|(value, ms)| (value.to_string(), ms_to_minutes(ms)))
            .filter(|&(_, minutes)| minutes > 0),
    );
    breakdown
}
