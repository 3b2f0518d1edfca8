//! Categorical event attributes used for grouping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category label used when an event has no value for the grouped attribute.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// The event field a breakdown is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Language,
    /// The workspace or project the file belongs to.
    #[serde(alias = "workspace")]
    Project,
    Platform,
}

impl Attribute {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Project => "project",
            Self::Platform => "platform",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for attribute names that are not groupable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown attribute: {0} (expected language, project or platform)")]
pub struct UnknownAttribute(String);

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "language" => Ok(Self::Language),
            "project" | "workspace" => Ok(Self::Project),
            "platform" => Ok(Self::Platform),
            _ => Err(UnknownAttribute(s.to_string())),
        }
    }
}

/// Maps an absent or blank attribute value to [`UNKNOWN_CATEGORY`].
pub fn normalize_attribute(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => UNKNOWN_CATEGORY,
    }
}
