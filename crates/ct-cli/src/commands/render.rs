//! Text rendering helpers shared by the reporting commands.

use std::fmt::Write;

use ct_core::Breakdown;

/// Formats whole minutes as a duration string.
/// Returns "Xh Ym" if >= 1 hour, "Xm" if < 1 hour.
/// Negative values are treated as 0m.
pub fn format_minutes(minutes: i64) -> String {
    if minutes < 0 {
        return "0m".to_string();
    }
    let hours = minutes / 60;
    let rest = minutes % 60;

    if hours >= 1 {
        format!("{hours}h {rest}m")
    } else {
        format!("{rest}m")
    }
}

/// Generates a 10-character progress bar.
/// Values <5% of max get a single block for visibility.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn progress_bar(value: i64, max: i64) -> String {
    if max <= 0 || value <= 0 {
        return "░░░░░░░░░░".to_string();
    }

    let ratio = value as f64 / max as f64;
    let filled = if ratio < 0.05 {
        1
    } else {
        (ratio * 10.0).round().min(10.0) as usize
    };

    let empty = 10 - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Breakdown entries ordered by minutes descending, then name.
pub fn ranked(breakdown: &Breakdown) -> Vec<(&str, i64)> {
    let mut rows: Vec<(&str, i64)> = breakdown
        .iter()
        .map(|(name, &minutes)| (name.as_str(), minutes))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    rows
}

/// Writes one aligned row: label, duration and a bar scaled to `max`.
pub fn write_row(output: &mut String, label: &str, minutes: i64, max: i64) {
    let duration = format_minutes(minutes);
    let bar = progress_bar(minutes, max);
    writeln!(output, "{label:<24} {duration:>7}  {bar}").unwrap();
}

/// Renders a breakdown as ranked rows with bars.
pub fn format_breakdown(breakdown: &Breakdown) -> String {
    let mut output = String::new();
    let rows = ranked(breakdown);
    let Some(&(_, max)) = rows.first() else {
        writeln!(output, "No activity recorded.").unwrap();
        return output;
    };
    for (name, minutes) in rows {
        write_row(&mut output, name, minutes, max);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_format_minutes_hours_and_minutes() {
        assert_eq!(format_minutes(150), "2h 30m");
        assert_eq!(format_minutes(60), "1h 0m");
        assert_eq!(format_minutes(90), "1h 30m");
    }

    #[test]
    fn test_format_minutes_minutes_only() {
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(1), "1m");
        assert_eq!(format_minutes(0), "0m");
    }

    #[test]
    fn test_format_minutes_negative_is_zero() {
        assert_eq!(format_minutes(-5), "0m");
    }

    #[test]
    fn test_progress_bar_scaling() {
        assert_eq!(progress_bar(100, 100), "██████████");
        assert_eq!(progress_bar(50, 100), "█████░░░░░");
        assert_eq!(progress_bar(20, 100), "██░░░░░░░░");
    }

    #[test]
    fn test_progress_bar_minimum() {
        assert_eq!(progress_bar(4, 100), "█░░░░░░░░░");
        assert_eq!(progress_bar(1, 100), "█░░░░░░░░░");
    }

    #[test]
    fn test_progress_bar_zero() {
        assert_eq!(progress_bar(0, 0), "░░░░░░░░░░");
        assert_eq!(progress_bar(0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn test_ranked_orders_by_minutes_then_name() {
        let breakdown: Breakdown = [("Go", 3), ("Rust", 10), ("C", 3)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(ranked(&breakdown), vec![("Rust", 10), ("C", 3), ("Go", 3)]);
    }

    #[test]
    fn test_format_breakdown() {
        let breakdown: Breakdown = [("Rust", 95), ("TOML", 5), ("Unknown", 0)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_snapshot!(format_breakdown(&breakdown), @r"
        Rust                      1h 35m  ██████████
        TOML                          5m  █░░░░░░░░░
        Unknown                       0m  ░░░░░░░░░░
        ");
    }

    #[test]
    fn test_format_breakdown_empty() {
        assert_eq!(format_breakdown(&Breakdown::new()), "No activity recorded.\n");
    }
}
