//! JSONL event store: one validated [`Event`] per line.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ct_core::Event;
use fs2::FileExt;

/// Returns the lock file guarding appends to `events_path`.
fn lock_path(events_path: &Path) -> PathBuf {
    events_path.with_extension("lock")
}

/// Loads every event from the store.
///
/// A missing store is treated as empty.
pub fn load_events(events_path: &Path) -> Result<Vec<Event>> {
    let file = match File::open(events_path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = ?events_path, "event store does not exist yet");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("failed to open {}", events_path.display()));
        }
    };

    let events = parse_events(BufReader::new(file))?;
    tracing::debug!(path = ?events_path, count = events.len(), "loaded events");
    Ok(events)
}

fn parse_events<R: BufRead>(reader: R) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let event: Event = serde_json::from_str(trimmed)
            .with_context(|| format!("invalid event on line {}", idx + 1))?;
        events.push(event);
    }
    Ok(events)
}

/// Appends an event to the store under an exclusive lock.
pub fn append_event(events_path: &Path, event: &Event) -> Result<()> {
    if let Some(parent) = events_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let lock_file = File::create(lock_path(events_path)).context("failed to create lock file")?;
    lock_file
        .lock_exclusive()
        .context("failed to acquire lock")?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(events_path)
        .context("failed to open events file")?;

    let json = serde_json::to_string(event).context("failed to serialize event")?;
    writeln!(file, "{json}").context("failed to write event")?;

    // Lock is released when lock_file is dropped
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ct_core::EventType;

    fn event(minute: u32, language: &str) -> Event {
        let mut event = Event::new(
            Utc.with_ymd_and_hms(2025, 1, 1, 9, minute, 0).unwrap(),
            EventType::FileEdited,
        );
        event.language = Some(language.to_string());
        event
    }

    #[test]
    fn missing_store_is_empty() {
        let temp = tempfile::tempdir().unwrap();
        let events = load_events(&temp.path().join("events.jsonl")).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn append_then_load_preserves_events() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested/dir/events.jsonl");

        append_event(&path, &event(0, "Rust")).unwrap();
        append_event(&path, &event(2, "Go")).unwrap();

        let events = load_events(&path).unwrap();
        assert_eq!(events, vec![event(0, "Rust"), event(2, "Go")]);
        assert!(temp.path().join("nested/dir/events.lock").exists());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let input = "\n{\"timestamp\":\"2025-01-01T09:00:00Z\",\"event_type\":\"fileSaved\"}\n\n";
        let events = parse_events(input.as_bytes()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, EventType::FileSaved);
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let input = "{\"timestamp\":\"2025-01-01T09:00:00Z\",\"event_type\":\"fileSaved\"}\nnot json\n";
        let err = parse_events(input.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "invalid event on line 2");
    }
}
