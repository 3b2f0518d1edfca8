//! Event type enum as the single source of truth for editor signal names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Editor signals accepted by the ingestion boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    ActivateFileChanged,
    EditorChanged,
    FileAddedLine,
    FileCreated,
    FileEdited,
    FileRemoved,
    FileSaved,
    ChangeEditorSelection,
    ChangeEditorVisibleRanges,
}

impl EventType {
    /// All variants, in wire order.
    pub const ALL: [Self; 9] = [
        Self::ActivateFileChanged,
        Self::EditorChanged,
        Self::FileAddedLine,
        Self::FileCreated,
        Self::FileEdited,
        Self::FileRemoved,
        Self::FileSaved,
        Self::ChangeEditorSelection,
        Self::ChangeEditorVisibleRanges,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ActivateFileChanged => "activateFileChanged",
            Self::EditorChanged => "editorChanged",
            Self::FileAddedLine => "fileAddedLine",
            Self::FileCreated => "fileCreated",
            Self::FileEdited => "fileEdited",
            Self::FileRemoved => "fileRemoved",
            Self::FileSaved => "fileSaved",
            Self::ChangeEditorSelection => "changeEditorSelection",
            Self::ChangeEditorVisibleRanges => "changeEditorVisibleRanges",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| UnknownEventType(s.to_string()))
    }
}

impl Serialize for EventType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown event type strings.
#[derive(Debug, Clone)]
pub struct UnknownEventType(String);

impl UnknownEventType {
    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event type: {}", self.0)
    }
}

impl std::error::Error for UnknownEventType {}
