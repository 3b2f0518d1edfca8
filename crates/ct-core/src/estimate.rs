//! Total active time estimation.
//!
//! # Algorithm Summary
//!
//! 1. Keep events inside the window and sort them by timestamp
//! 2. No events is zero; a single event earns the single-event credit
//! 3. Otherwise sum every gap between consecutive events that is within the
//!    idle timeout, add the last-event credit, and floor to whole minutes

use crate::event::ActivityEvent;
use crate::heuristic::{HeuristicConfig, ms_to_minutes};
use crate::window::TimeWindow;

/// Milliseconds between two events, earlier first.
pub(crate) fn gap_ms<E: ActivityEvent>(prev: &E, curr: &E) -> i64 {
    (curr.timestamp() - prev.timestamp()).num_milliseconds()
}

/// Estimates active minutes for the events inside `window`.
///
/// Input order does not matter. The result is never negative.
pub fn estimate_active_minutes<E: ActivityEvent>(
    events: &[E],
    window: &TimeWindow,
    config: &HeuristicConfig,
) -> i64 {
    let sorted = window.select(events);

    let minutes = match sorted.as_slice() {
        [] => 0,
        [_] => ms_to_minutes(config.single_credit()),
        _ => {
            let active_ms: i64 = sorted
                .windows(2)
                .map(|pair| gap_ms(pair[0], pair[1]))
                .filter(|&gap| {
                    let active = gap <= config.idle_timeout_ms;
                    if !active {
                        tracing::trace!(gap_ms = gap, "idle gap skipped");
                    }
                    active
                })
                .sum();
            ms_to_minutes(active_ms.saturating_add(config.last_credit()))
        }
    };

    tracing::debug!(%window, events = sorted.len(), minutes, "estimated active time");
    minutes
}
