use std::io;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{CommandFactory, Parser};
use ct_core::{Event, TimeWindow};
use tracing_subscriber::EnvFilter;

use ct_cli::commands::{breakdown, dashboard, events, ingest, minutes};
use ct_cli::{Cli, Commands, Config};

/// Loads every stored event.
fn load_store(config: &Config) -> Result<Vec<Event>> {
    events::load_events(&config.events_path).context("failed to load events")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so command output stays parseable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let now = Utc::now();
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::Ingest { json }) => {
            let event = ingest::run(json.as_deref(), &config.events_path)?;
            tracing::debug!(
                event_type = %event.event_type,
                timestamp = %event.timestamp,
                "event ingested"
            );
        }
        Some(Commands::Minutes {
            minutes: trailing,
            window,
            json,
        }) => {
            let window = match trailing {
                Some(n) => {
                    if *n <= 0 {
                        tracing::warn!(minutes = n, "non-positive --minutes selects an empty window");
                    }
                    TimeWindow::trailing_minutes(now, *n)
                }
                None => window.resolve(now)?,
            };
            let stored = load_store(&config)?;
            minutes::run(&mut stdout, &stored, &window, &config.heuristic, *json)?;
        }
        Some(Commands::Breakdown { by, window, json }) => {
            let window = window.resolve(now)?;
            let stored = load_store(&config)?;
            breakdown::run_breakdown(&mut stdout, &stored, &window, *by, &config.heuristic, *json)?;
        }
        Some(Commands::Timeseries { by, window, json }) => {
            let window = window.resolve(now)?;
            let stored = load_store(&config)?;
            breakdown::run_timeseries(&mut stdout, &stored, &window, *by, &config.heuristic, *json)?;
        }
        Some(Commands::Dashboard { period, json }) => {
            let stored = load_store(&config)?;
            dashboard::run(&mut stdout, &stored, *period, now, &config.heuristic, *json)?;
        }
        None => {
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
