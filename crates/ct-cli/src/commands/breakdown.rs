//! Breakdown and timeseries commands: active minutes grouped by attribute.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Result, bail};
use ct_core::{
    Attribute, DailyBreakdown, Event, HeuristicConfig, TimeWindow, breakdown_by_attribute,
    time_series_by_attribute,
};

use super::render::{format_breakdown, format_minutes, ranked};

/// Prints minutes per value of `attribute` inside `window`.
pub fn run_breakdown<W: Write>(
    writer: &mut W,
    events: &[Event],
    window: &TimeWindow,
    attribute: Attribute,
    heuristic: &HeuristicConfig,
    json: bool,
) -> Result<()> {
    let breakdown = breakdown_by_attribute(events, window, attribute, heuristic);

    if json {
        writeln!(writer, "{}", serde_json::to_string(&breakdown)?)?;
    } else {
        write!(writer, "{}", format_breakdown(&breakdown))?;
    }
    Ok(())
}

/// Prints one breakdown per UTC day of `window`.
///
/// The window needs both bounds since every day in it is listed.
pub fn run_timeseries<W: Write>(
    writer: &mut W,
    events: &[Event],
    window: &TimeWindow,
    attribute: Attribute,
    heuristic: &HeuristicConfig,
    json: bool,
) -> Result<()> {
    let (Some(start), Some(end)) = (window.start, window.end) else {
        bail!("timeseries needs a bounded window: pass --start or --period");
    };

    let series = time_series_by_attribute(events, start, end, attribute, heuristic);

    if json {
        writeln!(writer, "{}", serde_json::to_string(&series)?)?;
    } else {
        write!(writer, "{}", format_series(&series))?;
    }
    Ok(())
}

fn format_series(series: &[DailyBreakdown]) -> String {
    let mut output = String::new();
    if series.is_empty() {
        writeln!(output, "No days in range.").unwrap();
        return output;
    }

    for day in series {
        if day.breakdown.is_empty() {
            writeln!(output, "{}  (no activity)", day.date).unwrap();
            continue;
        }
        let entries: Vec<String> = ranked(&day.breakdown)
            .into_iter()
            .map(|(name, minutes)| format!("{name} {}", format_minutes(minutes)))
            .collect();
        writeln!(output, "{}  {}", day.date, entries.join(", ")).unwrap();
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ct_core::EventType;

    fn event(day: u32, hour: u32, minute: u32, language: &str) -> Event {
        let mut event = Event::new(
            Utc.with_ymd_and_hms(2025, 1, day, hour, minute, 0).unwrap(),
            EventType::FileEdited,
        );
        event.language = Some(language.to_string());
        event
    }

    fn events() -> Vec<Event> {
        vec![
            event(1, 9, 0, "Ruby"),
            event(1, 9, 2, "Ruby"),
            event(1, 9, 3, "Python"),
            event(3, 14, 0, "Go"),
        ]
    }

    fn window() -> TimeWindow {
        TimeWindow::between(
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 3, 23, 59, 59).unwrap(),
        )
    }

    fn breakdown_output(json: bool) -> String {
        let mut out = Vec::new();
        run_breakdown(
            &mut out,
            &events(),
            &window(),
            Attribute::Language,
            &HeuristicConfig::default(),
            json,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn timeseries_output(window: &TimeWindow, json: bool) -> Result<String> {
        let mut out = Vec::new();
        run_timeseries(
            &mut out,
            &events(),
            window,
            Attribute::Language,
            &HeuristicConfig::default(),
            json,
        )?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn breakdown_json() {
        // Ruby: 2m + 1m gap credited to the 09:02 event. Python's gap to Go is
        // idle so it earns nothing; Go takes the 30s last credit, floored to 0.
        assert_eq!(breakdown_output(true), "{\"Ruby\":3}\n");
    }

    #[test]
    fn breakdown_text() {
        insta::assert_snapshot!(breakdown_output(false), @"Ruby                          3m  ██████████");
    }

    #[test]
    fn timeseries_json_lists_every_day() {
        let out = timeseries_output(&window(), true).unwrap();
        assert_eq!(
            out,
            concat!(
                "[{\"date\":\"2025-01-01\",\"breakdown\":{\"Ruby\":3}},",
                "{\"date\":\"2025-01-02\",\"breakdown\":{}},",
                "{\"date\":\"2025-01-03\",\"breakdown\":{\"Go\":0}}]\n"
            )
        );
    }

    #[test]
    fn timeseries_text() {
        let out = timeseries_output(&window(), false).unwrap();
        insta::assert_snapshot!(out, @r"
        2025-01-01  Ruby 3m
        2025-01-02  (no activity)
        2025-01-03  Go 0m
        ");
    }

    #[test]
    fn timeseries_requires_start() {
        let window = TimeWindow::until(Utc.with_ymd_and_hms(2025, 1, 3, 0, 0, 0).unwrap());
        let err = timeseries_output(&window, true).unwrap_err();
        assert!(err.to_string().contains("bounded window"));
    }

    #[test]
    fn timeseries_inverted_window_is_empty() {
        let window = TimeWindow::between(
            Utc.with_ymd_and_hms(2025, 1, 3, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        );
        assert_eq!(timeseries_output(&window, true).unwrap(), "[]\n");
        assert_eq!(timeseries_output(&window, false).unwrap(), "No days in range.\n");
    }
}
