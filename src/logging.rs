//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so log lines go to `<data_dir>/pokedex.log`. The
//! filter comes from `Config::log_filter` (the `POKEDEX_LOG` variable), and
//! falls back to `info` when the directive does not parse.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, DEFAULT_LOG_FILTER};

/// Parse a filter directive, falling back to the default on error.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber writing to the configured log file.
///
/// Returns the log file path. Failing to open the file or a subscriber that
/// is already installed is reported as an error; callers treat it as
/// non-fatal.
pub fn init_tracing(config: &Config) -> io::Result<PathBuf> {
    let path = config.log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::registry()
        .with(build_filter(&config.log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Arc::new(file)),
        )
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    Ok(path)
}
