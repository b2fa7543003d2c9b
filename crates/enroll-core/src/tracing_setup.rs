use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable naming the log file
pub const LOG_FILE_ENV: &str = "ENROLL_LOG_FILE";

/// Install the global subscriber.
///
/// The terminal UI owns stdout, so logs only go to a file: `log_file` if
/// given, else `$ENROLL_LOG_FILE`. With neither set, events are dropped.
/// Verbosity follows `RUST_LOG` and defaults to `info`.
pub fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let log_path = log_file
        .map(|p| p.to_path_buf())
        .or_else(|| std::env::var_os(LOG_FILE_ENV).map(Into::into));

    let Some(log_path) = log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(path = %log_path.display(), "file logging enabled");
    Ok(())
}
