use crate::parse::Mode;
use clap::Parser;
use std::path::PathBuf;

/// Default config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "commafy.toml";

/// CLI argument parsing with environment variable support.
///
/// Environment variables follow the pattern `COMMAFY_*` and are overridden by CLI flags.
/// Example: `COMMAFY_MODE=big` is overridden by `--mode int`.
#[derive(Parser, Debug)]
#[command(name = "commafy")]
#[command(about = "Print numbers with thousands separators")]
#[command(version)]
pub struct Args {
    /// Numbers to format (read from stdin when omitted)
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// How values are interpreted
    #[arg(short, long, value_enum, env = "COMMAFY_MODE")]
    pub mode: Option<Mode>,

    /// Echo unparseable values instead of failing
    #[arg(long, env = "COMMAFY_LENIENT")]
    pub lenient: bool,

    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, env = "COMMAFY_CONFIG")]
    pub config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress everything but errors
    #[arg(short)]
    pub quiet: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Whether raw arguments ask for verbose output, before clap has run.
///
/// Matches `-v` anywhere in a short-flag cluster (`-vv`, `-qv`, `-vq`).
/// Negative numbers and long options never match.
pub fn wants_verbose<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter().any(|arg| {
        arg.as_ref()
            .strip_prefix('-')
            .filter(|flags| !flags.starts_with('-'))
            .is_some_and(|flags| {
                flags.contains('v') && flags.chars().all(|c| c.is_ascii_alphabetic())
            })
    })
}
