//! Core domain logic for codetime.
//!
//! This crate turns sparse editor activity events into active coding time:
//! - Estimation: total active minutes for a window
//! - Aggregation: active minutes per language, project or platform, overall and per day
//! - Ingestion: validating the editor payload into an [`Event`]

mod aggregate;
pub mod attribute;
mod estimate;
pub mod event;
pub mod event_type;
pub mod heuristic;
mod summary;
pub mod types;
pub mod window;

pub use aggregate::{Breakdown, DailyBreakdown, breakdown_by_attribute, time_series_by_attribute};
pub use attribute::{Attribute, UNKNOWN_CATEGORY, UnknownAttribute};
pub use estimate::estimate_active_minutes;
pub use event::{ActivityEvent, Event, EventPayload};
pub use event_type::{EventType, UnknownEventType};
pub use heuristic::{HeuristicConfig, HeuristicError};
pub use summary::{ActivitySummary, summarize};
pub use types::{OperationType, ValidationError};
pub use window::{Period, TimeWindow, UnknownPeriod};
