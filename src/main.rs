use anyhow::Result;
use commafy::utils::error::{CommafyError, format_error};
use commafy::{cli, run};

fn main() {
    // Try to determine verbose mode early for better error formatting
    // Default to false for early errors (before config is parsed)
    let verbose = cli::args::wants_verbose(std::env::args().skip(1));

    if let Err(e) = run_main() {
        display_error(&e, verbose);
        std::process::exit(1);
    }
}

/// Display an error with contextual formatting.
///
/// Tries to downcast to `CommafyError` for rich formatting, falls back to
/// anyhow's error chain display for other errors.
fn display_error(error: &anyhow::Error, verbose: bool) {
    if let Some(commafy_error) = error.downcast_ref::<CommafyError>() {
        eprintln!("{}", format_error(commafy_error, verbose));
        return;
    }

    eprintln!("\n\u{26a0} Error: {}", error);

    // Display the full error chain
    let causes: Vec<_> = error.chain().skip(1).collect();
    if !causes.is_empty() {
        eprintln!("\nCaused by:");
        for (i, cause) in causes.iter().enumerate() {
            let prefix = if i == causes.len() - 1 {
                "\u{2514}\u{2500}"
            } else {
                "\u{251c}\u{2500}"
            };
            eprintln!("{} {}", prefix, cause);
        }
    }

    if verbose {
        let backtrace = error.backtrace();
        if backtrace.status() == std::backtrace::BacktraceStatus::Captured {
            eprintln!("\nBacktrace:\n{}", backtrace);
        }
    }
}

fn run_main() -> Result<()> {
    // Parse CLI arguments (includes env vars)
    let args = cli::args::parse();

    // Load config from files + env vars (already merged)
    let config = cli::config::load(&args)?;

    // CLI args override config files
    let merged_config = cli::config::merge_config(&args, config)?;

    commafy::init_logging(&merged_config);

    run(merged_config)?;
    Ok(())
}
