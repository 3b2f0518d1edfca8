//! Dashboard summary: every breakdown for one window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate::{
    Breakdown, DailyBreakdown, breakdown_by_attribute, time_series_by_attribute,
};
use crate::attribute::Attribute;
use crate::event::ActivityEvent;
use crate::heuristic::HeuristicConfig;
use crate::window::TimeWindow;

/// Active time for a window, grouped every way the dashboard shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub by_language: Breakdown,
    pub by_project: Breakdown,
    pub by_platform: Breakdown,
    /// Per-day language breakdown.
    pub time_series: Vec<DailyBreakdown>,
    /// Sum of the language breakdown.
    pub total_minutes: i64,
}

/// Computes the summary for events between `start` and `end` (inclusive).
///
/// The breakdowns are independent and run in parallel.
pub fn summarize<E: ActivityEvent + Sync>(
    events: &[E],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    config: &HeuristicConfig,
) -> ActivitySummary {
    let window = TimeWindow::between(start, end);
    let breakdown = |attribute| breakdown_by_attribute(events, &window, attribute, config);

    let ((by_language, by_project), (by_platform, time_series)) = rayon::join(
        || {
            rayon::join(
                || breakdown(Attribute::Language),
                || breakdown(Attribute::Project),
            )
        },
        || {
            rayon::join(
                || breakdown(Attribute::Platform),
                || time_series_by_attribute(events, start, end, Attribute::Language, config),
            )
        },
    );

    let total_minutes = by_language.values().sum();

    ActivitySummary {
        start,
        end,
        by_language,
        by_project,
        by_platform,
        time_series,
        total_minutes,
    }
}
