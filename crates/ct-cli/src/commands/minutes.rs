//! Minutes command: total active minutes for a window.

use std::io::Write;

use anyhow::Result;
use ct_core::{Event, HeuristicConfig, TimeWindow, estimate_active_minutes};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct MinutesOutput {
    minutes: i64,
}

pub fn run<W: Write>(
    writer: &mut W,
    events: &[Event],
    window: &TimeWindow,
    heuristic: &HeuristicConfig,
    json: bool,
) -> Result<()> {
    let minutes = estimate_active_minutes(events, window, heuristic);

    if json {
        writeln!(writer, "{}", serde_json::to_string(&MinutesOutput { minutes })?)?;
    } else {
        writeln!(writer, "{minutes}")?;
    }
    Ok(())
}
