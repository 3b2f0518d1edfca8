//! Tunables shared by the estimator and the attribute aggregator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest gap between consecutive events still counted as activity (5 minutes).
pub const IDLE_TIMEOUT_MS: i64 = 300_000;

/// Credit for a window holding exactly one event, estimator only (1 minute).
pub const SINGLE_EVENT_CREDIT_MS: i64 = 60_000;

/// Grace period appended after the final event (30 seconds).
pub const LAST_EVENT_CREDIT_MS: i64 = 30_000;

/// Largest value any heuristic setting may take (7 days).
pub const MAX_HEURISTIC_MS: i64 = 7 * 24 * 60 * 60 * 1000;

pub(crate) const MS_PER_MINUTE: i64 = 60_000;

/// A heuristic setting outside `0..=MAX_HEURISTIC_MS`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field} must be between 0 and {max} ms, got {value}")]
pub struct HeuristicError {
    pub field: &'static str,
    pub value: i64,
    pub max: i64,
}

/// Configuration for the gap heuristic.
///
/// The estimator and the aggregator differ on single-event windows: the
/// estimator credits `single_event_credit_ms`, the aggregator credits
/// `last_event_credit_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Gaps longer than this are idle and contribute nothing.
    /// Default: 300000 (5 minutes). A gap exactly this long still counts.
    pub idle_timeout_ms: i64,

    /// Default: 60000 (1 minute).
    pub single_event_credit_ms: i64,

    /// Default: 30000 (30 seconds).
    pub last_event_credit_ms: i64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            idle_timeout_ms: IDLE_TIMEOUT_MS,
            single_event_credit_ms: SINGLE_EVENT_CREDIT_MS,
            last_event_credit_ms: LAST_EVENT_CREDIT_MS,
        }
    }
}

impl HeuristicConfig {
    /// Checks every setting is within `0..=MAX_HEURISTIC_MS`.
    pub fn validate(&self) -> Result<(), HeuristicError> {
        let fields = [
            ("idle_timeout_ms", self.idle_timeout_ms),
            ("single_event_credit_ms", self.single_event_credit_ms),
            ("last_event_credit_ms", self.last_event_credit_ms),
        ];
        for (field, value) in fields {
            if !(0..=MAX_HEURISTIC_MS).contains(&value) {
                return Err(HeuristicError {
                    field,
                    value,
                    max: MAX_HEURISTIC_MS,
                });
            }
        }
        Ok(())
    }

    /// Single-event credit, never below zero.
    pub(crate) const fn single_credit(&self) -> i64 {
        if self.single_event_credit_ms > 0 { self.single_event_credit_ms } else { 0 }
    }

    /// Last-event credit, never below zero.
    pub(crate) const fn last_credit(&self) -> i64 {
        if self.last_event_credit_ms > 0 { self.last_event_credit_ms } else { 0 }
    }
}

/// Converts milliseconds to whole minutes, dropping any partial minute.
pub(crate) const fn ms_to_minutes(ms: i64) -> i64 {
    ms.div_euclid(MS_PER_MINUTE)
}
