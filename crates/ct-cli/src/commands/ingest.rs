//! Ingest command for receiving events from editor extensions.
//!
//! The payload is validated at this boundary (millisecond epoch conversion,
//! event type and operation type checks) before it reaches the event store.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use ct_core::{Event, EventPayload};

use super::events::append_event;

/// Parses and validates a single JSON payload.
pub fn parse_payload(raw: &str) -> Result<Event> {
    let payload: EventPayload =
        serde_json::from_str(raw.trim()).context("invalid event JSON")?;
    let event = payload.into_event().context("invalid event")?;
    Ok(event)
}

/// Ingests one event into the store at `events_path`.
///
/// Reads the payload from stdin when `json` is `None`.
pub fn run(json: Option<&str>, events_path: &Path) -> Result<Event> {
    let raw = match json {
        Some(raw) => raw.to_string(),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read event from stdin")?;
            buf
        }
    };

    let event = parse_payload(&raw)?;
    append_event(events_path, &event)?;
    Ok(event)
}
