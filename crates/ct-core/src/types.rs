//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors raised at the ingestion boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required value was missing or blank.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The event type is not one of the known editor signals.
    #[error("invalid event type: {value}")]
    InvalidEventType { value: String },

    /// The operation type is neither `read` nor `write`.
    #[error("invalid operation type: {value}")]
    InvalidOperationType { value: String },

    /// The millisecond epoch cannot be represented as a timestamp.
    #[error("event time out of range: {millis}ms")]
    TimestampOutOfRange { millis: i64 },
}

/// Whether the editor reported a read or a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Read,
    Write,
}

impl OperationType {
    /// String representation used on the wire and in the event store.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OperationType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(Self::Read),
            "write" => Ok(Self::Write),
            _ => Err(ValidationError::InvalidOperationType {
                value: s.to_string(),
            }),
        }
    }
}
