//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ct_core::{Attribute, Period};

/// Active coding time from editor activity.
///
/// Stores editor events locally and estimates how many minutes were spent
/// actively coding, overall and per language, project or platform.
#[derive(Debug, Parser)]
#[command(name = "ct", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate one editor event and append it to the event store.
    Ingest {
        /// Event payload as JSON. Read from stdin when omitted.
        #[arg(long)]
        json: Option<String>,
    },

    /// Show total active minutes.
    Minutes {
        /// Only count the last N minutes.
        #[arg(long, conflicts_with_all = ["period", "start", "end"])]
        minutes: Option<i64>,

        #[command(flatten)]
        window: WindowArgs,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show active minutes grouped by an event attribute.
    Breakdown {
        /// Attribute to group by: language, project (or workspace), platform.
        #[arg(long, default_value = "language")]
        by: Attribute,

        #[command(flatten)]
        window: WindowArgs,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show active minutes per day, grouped by an event attribute.
    Timeseries {
        /// Attribute to group by: language, project (or workspace), platform.
        #[arg(long, default_value = "language")]
        by: Attribute,

        #[command(flatten)]
        window: WindowArgs,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the activity dashboard for a period.
    Dashboard {
        /// Period to report: today, 7d or 30d.
        #[arg(long, default_value = "7d")]
        period: Period,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Time window selection shared by the reporting commands.
///
/// Without `--start`/`--end` the window is `--period` (default 7d).
#[derive(Debug, Clone, Default, Args)]
pub struct WindowArgs {
    /// Preset period: today, 7d or 30d.
    #[arg(long, conflicts_with_all = ["start", "end"])]
    pub period: Option<Period>,

    /// Window start (ISO 8601 or relative, e.g. "2 hours ago").
    #[arg(long)]
    pub start: Option<String>,

    /// Window end (ISO 8601 or relative). Defaults to now.
    #[arg(long)]
    pub end: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn breakdown_accepts_workspace_alias() {
        let cli = Cli::try_parse_from(["ct", "breakdown", "--by", "workspace", "--period", "30d"])
            .unwrap();
        match cli.command {
            Some(Commands::Breakdown { by, window, json }) => {
                assert_eq!(by, Attribute::Project);
                assert_eq!(window.period, Some(Period::Last30Days));
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn minutes_conflicts_with_explicit_window() {
        let result = Cli::try_parse_from([
            "ct",
            "minutes",
            "--minutes",
            "30",
            "--start",
            "2025-01-01T00:00:00Z",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn period_conflicts_with_start() {
        let result = Cli::try_parse_from([
            "ct",
            "timeseries",
            "--period",
            "7d",
            "--start",
            "2025-01-01T00:00:00Z",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_attribute_is_rejected() {
        assert!(Cli::try_parse_from(["ct", "breakdown", "--by", "editor"]).is_err());
    }
}
