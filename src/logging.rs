use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_PREFIX: &str = "hockey-records.log";

/// Platform data directory for logs, or `./logs` when there is none.
pub fn get_log_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(mut path) => {
            path.push("hockey-records");
            path.push("logs");
            path
        }
        None => PathBuf::from("logs"),
    }
}

/// Installs a daily-rolling file subscriber. Keep the guard alive until exit
/// so buffered lines get flushed.
pub fn init_logging(dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    Ok(guard)
}

/// Like [`init_logging`], but a failure only costs the log file: the error
/// goes to stderr and the caller carries on without a subscriber.
pub fn init_logging_or_warn(dir: &Path) -> Option<WorkerGuard> {
    match init_logging(dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {e:#}");
            None
        }
    }
}
