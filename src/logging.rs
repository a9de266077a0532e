//! Logging configuration for cmdtree.
//!
//! The library only emits `tracing` events; applications embedding it pick a
//! subscriber. These helpers install the usual ones: stderr for interactive and
//! test runs, or a log file when stderr belongs to something else (a TUI).

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Initializes logging to a file.
///
/// Location: `~/.local/state/cmdtree/cmdtree.log` on Linux (XDG state directory),
/// or the platform-appropriate state/config directory on other systems.
/// Does nothing if a global subscriber is already installed.
pub fn init_file_logging() {
    init_file_logging_at(&get_log_path());
}

/// Initializes logging to the file at `log_path`, truncating it.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_file_logging_at(log_path: &Path) {
    if let Some(parent) = log_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory: {e}");
            return;
        }
    }

    // Truncate on each run to avoid unbounded growth
    let log_file = match File::create(log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file: {e}");
            return;
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(log_file)
        .with_ansi(false)
        .try_init();
}

/// Initializes logging to stderr.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Returns the path for the log file.
pub fn get_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        return state_dir.join("cmdtree").join("cmdtree.log");
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("cmdtree").join("cmdtree.log");
    }

    std::env::temp_dir().join("cmdtree.log")
}
