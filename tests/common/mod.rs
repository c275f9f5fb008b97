//! Common test utilities and fixtures for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Path to the compiled `commafy` binary.
pub fn commafy_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_commafy"))
}

/// Creates a temporary directory for test fixtures.
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Writes a config file into `dir` and returns its path.
pub fn write_config(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).expect("Failed to write config file");
    path
}

/// Writes the user-level config picked up through `XDG_CONFIG_HOME` for
/// commands built by [`command`] with `cwd` set to `dir`.
pub fn write_user_config(dir: &TempDir, body: &str) -> PathBuf {
    let config_dir = dir.path().join("xdg").join("commafy");
    std::fs::create_dir_all(&config_dir).expect("Failed to create user config dir");
    let path = config_dir.join("config.toml");
    std::fs::write(&path, body).expect("Failed to write user config");
    path
}

/// Builds a command for the binary with a clean environment, run from `cwd`.
///
/// `COMMAFY_*` and `RUST_LOG` are cleared so the host environment cannot
/// leak into assertions.
pub fn command(cwd: &Path) -> Command {
    let mut cmd = Command::new(commafy_bin());
    cmd.current_dir(cwd)
        .env_remove("COMMAFY_MODE")
        .env_remove("COMMAFY_LENIENT")
        .env_remove("COMMAFY_CONFIG")
        .env_remove("COMMAFY_GENERAL_MODE")
        .env_remove("COMMAFY_GENERAL_LENIENT")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", cwd.join("xdg"))
        .env("NO_COLOR", "1");
    cmd
}

/// Runs the binary with `args`, feeding `stdin` when given.
pub fn run(cwd: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    run_with_env(cwd, &[], args, stdin)
}

/// Like [`run`], with extra environment variables set on the child.
pub fn run_with_env(
    cwd: &Path,
    env: &[(&str, &str)],
    args: &[&str],
    stdin: Option<&str>,
) -> Output {
    use std::io::Write;

    let mut child = command(cwd)
        .envs(env.iter().copied())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn commafy");

    {
        let mut pipe = child.stdin.take().expect("stdin was piped");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes())
                .expect("Failed to write stdin");
        }
    }

    child.wait_with_output().expect("Failed to wait for commafy")
}
