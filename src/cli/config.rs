//! Configuration management using the `config` crate for hierarchical discovery and merging.
//!
//! ## Configuration Sources (in precedence order, highest to lowest):
//! 1. **CLI flags** - Highest precedence (passed separately to application logic)
//! 2. **Environment variables** - Middle precedence (via `COMMAFY_GENERAL_*`)
//! 3. **Config files** - Lowest precedence
//!
//! ## Config File Discovery (in merge order, later overrides earlier):
//! 1. `~/.config/commafy/config.toml` (user config directory - lowest precedence)
//! 2. `./commafy.toml` in current directory
//! 3. Explicit `--config` path (if provided and exists - overrides all above)
//!
//! ## Usage:
//! ```no_run
//! use commafy::cli::{args, config};
//!
//! let args = args::parse();
//! let loaded = config::load(&args)?;
//! let merged = config::merge_config(&args, loaded)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::MergedConfig;
use crate::cli::args::{Args, DEFAULT_CONFIG_FILE};
use crate::parse::Mode;
use crate::utils::error::CommafyError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure loaded from config files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// One of `auto`, `int`, `float`, `big`; validated when merging.
    pub mode: Option<String>,
    #[serde(default)]
    pub lenient: bool,
}

fn discover_config_paths(explicit_path: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // User config (lowest precedence)
    if let Some(user_config) = get_user_config_path() {
        paths.push(user_config);
    }

    // Current directory config
    let current_dir_config = PathBuf::from(DEFAULT_CONFIG_FILE);
    if current_dir_config.exists() {
        paths.push(current_dir_config);
    }

    // Explicit --config path (highest precedence)
    if explicit_path != Path::new(DEFAULT_CONFIG_FILE) && explicit_path.exists() {
        paths.push(explicit_path.to_path_buf());
    }

    paths
}

fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|config_dir| config_dir.join("commafy").join("config.toml"))
        .filter(|path| path.exists())
}

/// Load configuration from discovered config files and environment variables.
pub fn load(args: &Args) -> Result<Config> {
    let paths = discover_config_paths(&args.config);
    load_from(&paths)
}

/// Load configuration from an explicit list of files (later files win),
/// then apply `COMMAFY_*` environment overrides.
pub fn load_from(paths: &[PathBuf]) -> Result<Config> {
    let mut builder = config::Config::builder();

    for config_path in paths {
        builder = builder.add_source(config::File::from(config_path.as_path()));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("COMMAFY")
            .separator("_")
            .try_parsing(true),
    );

    let settings = builder.build().context("Failed to build configuration")?;

    settings
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

/// Merge CLI arguments over file/env configuration.
///
/// A mode given on the command line (or via `COMMAFY_MODE`) replaces the
/// configured one; `--lenient` can only switch leniency on.
pub fn merge_config(args: &Args, config: Config) -> Result<MergedConfig, CommafyError> {
    let mode = match (args.mode, config.general.mode.as_deref()) {
        (Some(mode), _) => mode,
        (None, Some(configured)) => configured.parse()?,
        (None, None) => Mode::default(),
    };

    Ok(MergedConfig {
        values: args.values.clone(),
        mode,
        lenient: args.lenient || config.general.lenient,
        verbose: args.verbose,
        quiet: args.quiet,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_config(&dir, "a.toml", "[general]\nmode = \"int\"\nlenient = true\n");
        let second = write_config(&dir, "b.toml", "[general]\nmode = \"big\"\n");

        let config = load_from(&[first, second]).unwrap();
        assert_eq!(config.general.mode.as_deref(), Some("big"));
        assert!(config.general.lenient);
    }

    #[test]
    fn test_empty_sources_give_defaults() {
        let config = load_from(&[]).unwrap();
        assert!(!config.general.lenient);
    }

    #[test]
    fn test_cli_mode_overrides_config() {
        let args = Args::try_parse_from(["commafy", "--mode", "float", "1"]).unwrap();
        let config = Config {
            general: GeneralConfig {
                mode: Some("big".to_string()),
                lenient: true,
            },
        };
        let merged = merge_config(&args, config).unwrap();
        assert_eq!(merged.mode, Mode::Float);
        assert!(merged.lenient);
        assert_eq!(merged.values, vec!["1"]);
    }

    #[test]
    fn test_merge_carries_verbosity_into_log_level() {
        let args = Args::try_parse_from(["commafy", "-vv"]).unwrap();
        let merged = merge_config(&args, Config::default()).unwrap();
        assert_eq!(merged.verbose, 2);
        assert_eq!(merged.log_level(), tracing::Level::DEBUG);

        let args = Args::try_parse_from(["commafy", "-qv"]).unwrap();
        let merged = merge_config(&args, Config::default()).unwrap();
        assert!(merged.quiet);
        assert_eq!(merged.log_level(), tracing::Level::ERROR);
    }

    #[test]
    fn test_config_mode_used_when_cli_silent() {
        let args = Args::try_parse_from(["commafy"]).unwrap();
        let config = Config {
            general: GeneralConfig {
                mode: Some("Int".to_string()),
                lenient: false,
            },
        };
        assert_eq!(merge_config(&args, config).unwrap().mode, Mode::Int);
    }

    #[test]
    fn test_invalid_config_mode_is_config_error() {
        let args = Args::try_parse_from(["commafy"]).unwrap();
        let config = Config {
            general: GeneralConfig {
                mode: Some("hex".to_string()),
                lenient: false,
            },
        };
        let err = merge_config(&args, config).unwrap_err();
        assert!(matches!(err, CommafyError::Config(_)));
    }
}
