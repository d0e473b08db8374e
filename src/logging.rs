//! Logging setup.
//!
//! The terminal is in raw mode on the alternate screen while playing, so log
//! records can only go to a file. Without `EQUATIO_LOG_PATH` no logger is
//! installed and every `log` macro is a no-op.

use std::env;
use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

use crate::config::LaunchConfig;

/// Install the file logger described by `config`.
///
/// Returns whether a logger was installed.
pub fn init_logger(config: &LaunchConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let mut builder = Builder::new();
    builder
        .filter(None, config.log_level)
        .format_module_path(false)
        .target(Target::Pipe(Box::new(file)));

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.try_init().context("logger already initialized")?;
    log::info!(
        "logging to {} at {} level",
        path.display(),
        config.log_level
    );
    Ok(true)
}
