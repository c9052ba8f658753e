mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use calgrid_core::config::CalGridConfig;
use calgrid_core::{Clock, FixedClock, SystemClock};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calgrid")]
#[command(about = "Lay out a fixed multi-day calendar window in the terminal")]
struct Cli {
    /// Config file (default: ~/.config/calgrid/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the hour and date markers of the window (no network)
    Ruler,
    /// Fetch and list events in the window
    Events {
        /// Pretend it is this instant (RFC3339) when marking current/next events
        #[arg(long)]
        now: Option<String>,
    },
    /// Fetch events and print their offset, height and column
    Layout,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;
    let window = config
        .window
        .to_window()
        .context("Invalid [window] configuration")?;

    match cli.command {
        Commands::Ruler => commands::ruler::run(&window),
        Commands::Events { now } => {
            let clock = resolve_clock(now.as_deref())?;
            let events = commands::fetch_window_events(&config, &window).await?;
            commands::events::run(&window, &events, &clock)
        }
        Commands::Layout => {
            let events = commands::fetch_window_events(&config, &window).await?;
            commands::layout::run(&window, &events, config.window.columns)
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<CalGridConfig> {
    match path {
        Some(path) => {
            let mut config = CalGridConfig::load_from(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.apply_env_overrides(|key| std::env::var(key).ok());
            Ok(config)
        }
        None => CalGridConfig::load().context("Failed to load calgrid config"),
    }
}

/// Either the wall clock or a fixed instant from `--now`.
enum CliClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for CliClock {
    fn now(&self) -> DateTime<Utc> {
        match self {
            CliClock::System(clock) => clock.now(),
            CliClock::Fixed(clock) => clock.now(),
        }
    }
}

fn resolve_clock(now: Option<&str>) -> Result<CliClock> {
    match now {
        Some(s) => {
            let instant = DateTime::parse_from_rfc3339(s).with_context(|| {
                format!("Invalid --now '{s}'. Expected RFC3339, e.g. 2025-12-19T09:30:00-08:00")
            })?;
            Ok(CliClock::Fixed(FixedClock(instant.with_timezone(&Utc))))
        }
        None => Ok(CliClock::System(SystemClock)),
    }
}
