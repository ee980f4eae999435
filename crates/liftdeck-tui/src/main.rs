//! Liftdeck entry point.

use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use clap::{Parser, ValueEnum};
use liftdeck_core::{Deck, LockPolicy};
use liftdeck_tui::{App, Runtime, TerminalDriver, TerminalError};
use tracing_subscriber::EnvFilter;

/// Elevator-themed slide deck for the terminal
#[derive(Parser, Debug)]
#[command(name = "liftdeck")]
#[command(about = "Ride an elevator through a slide deck, one floor per slide")]
#[command(version)]
struct Args {
    /// Deck file (JSON)
    ///
    /// If not provided, the built-in deck is shown.
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// When the travel lock is released during a ride
    #[arg(long, value_enum, default_value_t = Policy::HoldUntilRevealed)]
    lock_policy: Policy,

    /// Runtime tick interval in milliseconds
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..=1000))]
    tick_ms: u64,

    /// Write logs to this file
    ///
    /// Logging is off without it, the alternate screen owns stdout.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Policy {
    /// Hold the lock until the new floor is revealed
    HoldUntilRevealed,
    /// Release the lock on arrival, before the doors open
    ReleaseOnArrival,
}

impl From<Policy> for LockPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::HoldUntilRevealed => Self::HoldUntilRevealed,
            Policy::ReleaseOnArrival => Self::ReleaseOnArrival,
        }
    }
}

fn init_logging(path: &Path, level: &str) -> Result<(), TerminalError> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_deck(path: Option<&Path>) -> Result<Deck, TerminalError> {
    match path {
        Some(path) => Ok(Deck::load(path)?),
        None => Ok(Deck::builtin()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path, &args.log_level)?;
    }

    // Load before taking over the terminal so errors stay readable.
    let deck = load_deck(args.deck.as_deref())?;
    let app = App::new(deck).with_policy(args.lock_policy.into());

    let driver = TerminalDriver::new(Duration::from_millis(args.tick_ms))?;
    Runtime::new(driver, app).run().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["liftdeck"]);
        assert_eq!(args.lock_policy, Policy::HoldUntilRevealed);
        assert_eq!(args.tick_ms, 16);
        assert_eq!(args.log_level, "info");
        assert!(args.deck.is_none() && args.log_file.is_none());
    }

    #[test]
    fn policy_flag_is_kebab_case() {
        let args = Args::parse_from(["liftdeck", "--lock-policy", "release-on-arrival"]);
        assert_eq!(LockPolicy::from(args.lock_policy), LockPolicy::ReleaseOnArrival);
    }

    #[test]
    fn tick_must_be_positive() {
        assert!(Args::try_parse_from(["liftdeck", "--tick-ms", "0"]).is_err());
    }

    #[test]
    fn missing_deck_file_is_a_deck_error() {
        let err = load_deck(Some(Path::new("/nonexistent/deck.json"))).unwrap_err();
        assert!(matches!(err, TerminalError::Deck(_)));
    }
}
