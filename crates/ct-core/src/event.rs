//! Editor activity events and the ingestion payload they are built from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::event_type::EventType;
use crate::types::{OperationType, ValidationError};

/// An event the aggregation engine can read.
///
/// This trait allows estimation to work with different event representations
/// (e.g., [`Event`] loaded from the event store, or test fixtures).
pub trait ActivityEvent {
    /// Returns when the event occurred.
    fn timestamp(&self) -> DateTime<Utc>;

    /// Returns the raw value of a groupable attribute, if any.
    fn attribute(&self, attribute: Attribute) -> Option<&str>;
}

/// A validated activity signal reported by an editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// Which editor signal this is.
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<OperationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Workspace or project identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_arch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,
}

impl Event {
    /// Creates an event with no optional fields set.
    pub const fn new(timestamp: DateTime<Utc>, event_type: EventType) -> Self {
        Self {
            timestamp,
            event_type,
            operation_type: None,
            language: None,
            project: None,
            platform: None,
            platform_arch: None,
            editor: None,
            relative_file: None,
            absolute_file: None,
            git_origin: None,
            git_branch: None,
        }
    }
}

impl ActivityEvent for Event {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn attribute(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::Language => self.language.as_deref(),
            Attribute::Project => self.project.as_deref(),
            Attribute::Platform => self.platform.as_deref(),
        }
    }
}

/// The JSON payload an editor extension posts for one event.
///
/// Keys are accepted in both snake_case and camelCase. `event_time` is a
/// millisecond Unix epoch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(default, alias = "eventTime")]
    pub event_time: Option<i64>,
    #[serde(default, alias = "eventType")]
    pub event_type: Option<String>,
    #[serde(default, alias = "operationType")]
    pub operation_type: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default, alias = "platformArch")]
    pub platform_arch: Option<String>,
    #[serde(default)]
    pub editor: Option<String>,
    #[serde(default, alias = "relativeFile")]
    pub relative_file: Option<String>,
    #[serde(default, alias = "absoluteFile")]
    pub absolute_file: Option<String>,
    #[serde(default, alias = "gitOrigin")]
    pub git_origin: Option<String>,
    #[serde(default, alias = "gitBranch")]
    pub git_branch: Option<String>,
}

impl EventPayload {
    /// Validates the payload and converts it into an [`Event`].
    pub fn into_event(self) -> Result<Event, ValidationError> {
        let millis = self
            .event_time
            .ok_or(ValidationError::Empty { field: "event time" })?;
        let timestamp = DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or(ValidationError::TimestampOutOfRange { millis })?;

        let event_type = match self.event_type.as_deref().map(str::trim) {
            None | Some("") => return Err(ValidationError::Empty { field: "event type" }),
            Some(raw) => raw
                .parse::<EventType>()
                .map_err(|e| ValidationError::InvalidEventType {
                    value: e.value().to_string(),
                })?,
        };

        // Blank operation types are treated as absent.
        let operation_type = match self.operation_type.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<OperationType>()?),
        };

        Ok(Event {
            timestamp,
            event_type,
            operation_type,
            language: self.language,
            project: self.project,
            platform: self.platform,
            platform_arch: self.platform_arch,
            editor: self.editor,
            relative_file: self.relative_file,
            absolute_file: self.absolute_file,
            git_origin: self.git_origin,
            git_branch: self.git_branch,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn camel_case_payload_converts() {
        let json = r#"{
            "eventTime": 1736413200000,
            "eventType": "fileEdited",
            "operationType": "write",
            "language": "rust",
            "project": "codetime",
            "platform": "linux",
            "platformArch": "x64",
            "relativeFile": "src/main.rs",
            "absoluteFile": "/home/dev/codetime/src/main.rs",
            "gitOrigin": "git@example.com:dev/codetime.git",
            "gitBranch": "main",
            "editor": "vscode"
        }"#;
        let payload: EventPayload = serde_json::from_str(json).unwrap();
        let event = payload.into_event().unwrap();

        assert_eq!(
            event.timestamp,
            Utc.with_ymd_and_hms(2025, 1, 9, 9, 0, 0).unwrap()
        );
        assert_eq!(event.event_type, EventType::FileEdited);
        assert_eq!(event.operation_type, Some(OperationType::Write));
        assert_eq!(event.platform_arch.as_deref(), Some("x64"));
        assert_eq!(event.relative_file.as_deref(), Some("src/main.rs"));
        assert_eq!(event.git_branch.as_deref(), Some("main"));
    }

    #[test]
    fn snake_case_payload_converts() {
        let json = r#"{
            "event_time": 1736413200500,
            "event_type": "fileSaved",
            "platform_arch": "arm64"
        }"#;
        let payload: EventPayload = serde_json::from_str(json).unwrap();
        let event = payload.into_event().unwrap();

        assert_eq!(event.timestamp.timestamp_millis(), 1_736_413_200_500);
        assert_eq!(event.event_type, EventType::FileSaved);
        assert_eq!(event.platform_arch.as_deref(), Some("arm64"));
        assert_eq!(event.operation_type, None);
    }

    #[test]
    fn missing_event_time_is_rejected() {
        let payload = EventPayload {
            event_type: Some("fileSaved".to_string()),
            ..EventPayload::default()
        };
        assert_eq!(
            payload.into_event().unwrap_err(),
            ValidationError::Empty { field: "event time" }
        );
    }

    #[test]
    fn unknown_event_type_is_rejected() {
        let payload = EventPayload {
            event_time: Some(0),
            event_type: Some("fileRenamed".to_string()),
            ..EventPayload::default()
        };
        assert_eq!(
            payload.into_event().unwrap_err(),
            ValidationError::InvalidEventType {
                value: "fileRenamed".to_string()
            }
        );
    }

    #[test]
    fn blank_event_type_is_rejected() {
        let payload = EventPayload {
            event_time: Some(0),
            event_type: Some("  ".to_string()),
            ..EventPayload::default()
        };
        assert_eq!(
            payload.into_event().unwrap_err(),
            ValidationError::Empty { field: "event type" }
        );
    }

    #[test]
    fn operation_type_validation() {
        let blank = EventPayload {
            event_time: Some(0),
            event_type: Some("fileEdited".to_string()),
            operation_type: Some(String::new()),
            ..EventPayload::default()
        };
        assert_eq!(blank.into_event().unwrap().operation_type, None);

        let invalid = EventPayload {
            event_time: Some(0),
            event_type: Some("fileEdited".to_string()),
            operation_type: Some("delete".to_string()),
            ..EventPayload::default()
        };
        assert!(matches!(
            invalid.into_event(),
            Err(ValidationError::InvalidOperationType { .. })
        ));
    }

    #[test]
    fn out_of_range_time_is_rejected() {
        let payload = EventPayload {
            event_time: Some(i64::MAX),
            event_type: Some("fileEdited".to_string()),
            ..EventPayload::default()
        };
        assert_eq!(
            payload.into_event().unwrap_err(),
            ValidationError::TimestampOutOfRange { millis: i64::MAX }
        );
    }

    #[test]
    fn attribute_accessor_selects_field() {
        let mut event = Event::new(
            Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap(),
            EventType::FileEdited,
        );
        event.language = Some("Ruby".to_string());
        event.platform = Some("darwin".to_string());

        assert_eq!(event.attribute(Attribute::Language), Some("Ruby"));
        assert_eq!(event.attribute(Attribute::Project), None);
        assert_eq!(event.attribute(Attribute::Platform), Some("darwin"));
    }

    #[test]
    fn stored_event_roundtrip() {
        let mut event = Event::new(
            Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap(),
            EventType::EditorChanged,
        );
        event.project = Some("codetime".to_string());

        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"timestamp":"2025-01-01T09:00:00Z","event_type":"editorChanged","project":"codetime"}"#
        );
        let parsed: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
