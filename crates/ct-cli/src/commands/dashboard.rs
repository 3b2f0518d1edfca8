//! Dashboard command: every breakdown for a preset period.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use ct_core::{ActivitySummary, Breakdown, Event, HeuristicConfig, Period, summarize};
use serde::Serialize;

use super::render::{format_minutes, ranked, write_row};

#[derive(Debug, Serialize)]
struct DashboardOutput<'a> {
    period: Period,
    label: &'static str,
    #[serde(flatten)]
    summary: &'a ActivitySummary,
}

pub fn run<W: Write>(
    writer: &mut W,
    events: &[Event],
    period: Period,
    now: DateTime<Utc>,
    heuristic: &HeuristicConfig,
    json: bool,
) -> Result<()> {
    let window = period.window(now);
    // Period windows are always bounded.
    let (start, end) = (window.start.unwrap_or(now), window.end.unwrap_or(now));
    let summary = summarize(events, start, end, heuristic);

    if json {
        let output = DashboardOutput {
            period,
            label: period.label(),
            summary: &summary,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        write!(writer, "{}", format_dashboard(period, &summary))?;
    }
    Ok(())
}

/// Renders the dashboard as plain text.
pub fn format_dashboard(period: Period, summary: &ActivitySummary) -> String {
    let mut output = String::new();

    writeln!(output, "CODING ACTIVITY: {}", period.label()).unwrap();
    writeln!(
        output,
        "{} to {} (UTC)",
        summary.start.date_naive(),
        summary.end.date_naive()
    )
    .unwrap();
    writeln!(output).unwrap();

    if summary.total_minutes == 0 && summary.by_language.is_empty() {
        writeln!(output, "No activity recorded for this period.").unwrap();
        return output;
    }

    writeln!(output, "Total active: {}", format_minutes(summary.total_minutes)).unwrap();

    write_section(&mut output, "BY LANGUAGE", &summary.by_language);
    write_section(&mut output, "BY PROJECT", &summary.by_project);
    write_section(&mut output, "BY PLATFORM", &summary.by_platform);

    write_heading(&mut output, "DAILY");
    let daily: Vec<(String, i64)> = summary
        .time_series
        .iter()
        .map(|day| (day.date.to_string(), day.breakdown.values().sum()))
        .collect();
    let max = daily.iter().map(|&(_, minutes)| minutes).max().unwrap_or(0);
    for (date, minutes) in &daily {
        write_row(&mut output, date, *minutes, max);
    }

    output
}

fn write_heading(output: &mut String, title: &str) {
    writeln!(output).unwrap();
    writeln!(output, "{title}").unwrap();
    writeln!(output, "{}", "─".repeat(title.chars().count())).unwrap();
}

fn write_section(output: &mut String, title: &str, breakdown: &Breakdown) {
    write_heading(output, title);
    let rows = ranked(breakdown);
    let Some(&(_, max)) = rows.first() else {
        writeln!(output, "(no activity)").unwrap();
        return;
    };
    for (name, minutes) in rows {
        write_row(output, name, minutes, max);
    }
}
