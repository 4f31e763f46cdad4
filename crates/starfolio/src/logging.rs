//! File logging.
//!
//! The terminal belongs to the UI, so logs go to `starfolio.log` in the data
//! directory. `RUST_LOG` takes precedence over the configured level.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "starfolio.log";

/// Build the filter from `RUST_LOG`, falling back to `default_level`.
pub fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber writing into `dir`. Returns the log path.
pub fn init(dir: &Path, default_level: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create log directory {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))?;
    Ok(path)
}
