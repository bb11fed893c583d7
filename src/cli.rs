//! CLI interface for the simulator.
//!
//! Running with no arguments plays the full narrative against the default
//! dashboard endpoint. Flags override the config file, which overrides the
//! built-in defaults.

use std::io;
use std::time::Duration;

use clap::{ArgAction, Parser};

use crate::config::Config;
use crate::notify::{self, DEFAULT_ENDPOINT, HttpNotifier, MAX_TIMEOUT_SECS};
use crate::script::{DEFAULT_PAUSE, Script};

/// Oumi training simulator: prints progress and reports it to the dashboard.
#[derive(Debug, Parser)]
#[command(name = "oumi-sim", version)]
pub struct Cli {
    /// Status endpoint to post updates to.
    #[arg(long, value_parser = notify::parse_endpoint)]
    endpoint: Option<String>,

    /// Seconds to pause between phases.
    #[arg(long)]
    pause_secs: Option<u64>,

    /// Request timeout in seconds, 1 to 3600 (HTTP client default if unset).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_TIMEOUT_SECS))]
    timeout_secs: Option<u64>,

    /// Show diagnostic logs on stderr. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter implied by `--verbose`.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Effective settings after merging flags, config, and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub pause: Duration,
    pub timeout: Option<Duration>,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let endpoint = cli
            .endpoint
            .clone()
            .or_else(|| config.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let pause = cli
            .pause_secs
            .or(config.pause_secs)
            .map_or(DEFAULT_PAUSE, Duration::from_secs);

        let timeout = cli
            .timeout_secs
            .or(config.timeout_secs)
            .map(Duration::from_secs);

        Self {
            endpoint,
            pause,
            timeout,
        }
    }
}

/// Run the CLI, returning an error message on failure.
///
/// Delivery failures never reach here; only local faults do.
pub fn run(cli: &Cli, config: &Config) -> Result<(), String> {
    let settings = Settings::resolve(cli, config);
    log::debug!("resolved settings: {settings:?}");

    let notifier = HttpNotifier::new(settings.endpoint, settings.timeout)
        .map_err(|e| e.to_string())?;

    let stdout = io::stdout();
    Script::new(settings.pause)
        .run(&notifier, &mut stdout.lock())
        .map_err(|e| format!("failed to write to stdout: {e}"))
}
