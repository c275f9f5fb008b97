use crate::parse::{Mode, is_integer_literal};
use console::style;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommafyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid number '{input}' for mode '{mode}'")]
    InvalidNumber { input: String, mode: Mode },
}

impl CommafyError {
    pub fn invalid_number(input: &str, mode: Mode) -> Self {
        CommafyError::InvalidNumber {
            input: input.to_string(),
            mode,
        }
    }

    pub fn invalid_mode(mode: &str) -> Self {
        CommafyError::Config(format!(
            "Invalid mode '{}'. Valid modes are: auto, int, float, big",
            mode
        ))
    }

    /// Short hint shown under the error banner, if one applies.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CommafyError::InvalidNumber { input, mode } => Some(match mode {
                Mode::Auto => "Values must be integers or decimal numbers".to_string(),
                Mode::Int if is_integer_literal(input) => {
                    "Use --mode big for integers outside the 64-bit range".to_string()
                }
                Mode::Int => "Values must be whole numbers, use --mode float for fractions"
                    .to_string(),
                Mode::Float => "Values must be decimal or exponent-form numbers".to_string(),
                Mode::Big => "Values must be an optional sign followed by digits".to_string(),
            }),
            CommafyError::Config(_) => {
                Some("Check commafy.toml and COMMAFY_* environment variables".to_string())
            }
            CommafyError::Io(_) => None,
        }
    }
}

/// Render an error for the terminal, with its suggestion when present.
pub fn format_error(error: &CommafyError, verbose: bool) -> String {
    let mut out = format!("\n{} {}", style("\u{26a0} Error:").red().bold(), error);

    if let Some(suggestion) = error.suggestion() {
        out.push_str(&format!("\n{} {}", style("Suggestion:").cyan(), suggestion));
    }

    if verbose {
        out.push_str(&format!("\n\nDetails: {:?}", error));
    }

    out
}
