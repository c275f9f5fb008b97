//! # commafy
//!
//! Thousands-separator grouping for integers, floats and arbitrary-precision
//! integers:
//!
//! ```
//! use commafy::{Commafy, format_big_int, format_float, format_int};
//! use num_bigint::BigInt;
//!
//! assert_eq!(format_int(1_234_567), "1,234,567");
//! assert_eq!(format_float(-1234.5), "-1,234.5");
//! assert_eq!(format_big_int(&BigInt::from(10).pow(12)), "1,000,000,000,000");
//! assert_eq!(65_536u32.commafy(), "65,536");
//! ```
//!
//! ## Architecture
//!
//! - [`grouping`] holds the only real logic: separator insertion over a
//!   plain decimal string, with sign and fraction handling.
//! - [`formatter`] renders each numeric type to decimal and delegates to
//!   [`grouping`].
//! - [`parse`] turns text into a [`Number`] according to a [`Mode`]; the
//!   command-line binary is built on it.
//! - [`cli`] and [`utils`] carry argument parsing, configuration and errors.
//!
//! Configuration for the binary follows hierarchical precedence:
//! 1. User config (~/.config/commafy/config.toml)
//! 2. Current directory (commafy.toml)
//! 3. Explicit --config path
//! 4. Environment variables (COMMAFY_*)
//! 5. CLI flags (highest precedence)

pub mod cli;
pub mod formatter;
pub mod grouping;
pub mod parse;
pub mod utils;

pub use formatter::{Commafy, format_big_int, format_float, format_int};
pub use parse::{Mode, Number};

use crate::utils::error::CommafyError;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

/// Final resolved configuration after merging all sources (CLI, env, config files).
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
    /// Values given on the command line; stdin is read when empty
    pub values: Vec<String>,
    /// How values are interpreted
    pub mode: Mode,
    /// Echo unparseable values instead of failing
    pub lenient: bool,
    /// Verbosity level (0-3)
    pub verbose: u8,
    /// Quiet mode (errors only)
    pub quiet: bool,
}

/// Counts collected while formatting a batch of values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Values that parsed and were grouped
    pub formatted: usize,
    /// Values echoed unchanged in lenient mode
    pub passed_through: usize,
}

impl MergedConfig {
    /// Log level implied by `quiet` and `verbose`.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

impl RunSummary {
    fn absorb(&mut self, other: RunSummary) {
        self.formatted += other.formatted;
        self.passed_through += other.passed_through;
    }
}

/// Initialize the tracing subscriber. Logs go to stderr; `RUST_LOG` wins
/// over the verbosity flags when set.
pub fn init_logging(config: &MergedConfig) {
    let level = config.log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    // A second init (e.g. from tests) keeps the first subscriber.
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .try_init()
        .is_err()
    {
        tracing::debug!("Logging already initialized");
    }
}

/// Format every token, writing one grouped value per line to `out`.
///
/// In strict mode the first unparseable token stops the batch with
/// [`CommafyError::InvalidNumber`]; lines already written stay written. In
/// lenient mode such tokens are echoed as-is.
pub fn format_tokens<I, S, W>(
    tokens: I,
    mode: Mode,
    lenient: bool,
    out: &mut W,
) -> Result<RunSummary, CommafyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut summary = RunSummary::default();

    for token in tokens {
        let token = token.as_ref();
        match Number::parse(token, mode) {
            Ok(number) => {
                tracing::trace!("{} -> {:?}", token, number);
                writeln!(out, "{}", number.format())?;
                summary.formatted += 1;
            }
            Err(err) if lenient => {
                tracing::warn!("{}; passing it through unchanged", err);
                writeln!(out, "{}", token)?;
                summary.passed_through += 1;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(summary)
}

/// Run the command-line flow: format the configured values, or every
/// whitespace-separated token on stdin when none were given.
pub fn run(config: MergedConfig) -> Result<RunSummary> {
    tracing::info!("commafy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        "Configuration: mode={}, lenient={}, values={}",
        config.mode,
        config.lenient,
        config.values.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = if config.values.is_empty() {
        tracing::debug!("No values given, reading stdin");
        let mut summary = RunSummary::default();
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            summary.absorb(format_tokens(
                line.split_whitespace(),
                config.mode,
                config.lenient,
                &mut out,
            )?);
        }
        summary
    } else {
        format_tokens(&config.values, config.mode, config.lenient, &mut out)?
    };

    out.flush().context("Failed to flush stdout")?;

    tracing::info!(
        "Formatted {} values ({} passed through)",
        summary.formatted,
        summary.passed_through
    );

    Ok(summary)
}
