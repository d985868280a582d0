//! Logging setup
//!
//! The dashboard owns the terminal while it runs, so log lines only reach the
//! screen at `warn` and above. Pass `--log-file` to get the full stream.

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Initialize tracing from the command-line configuration.
///
/// Returns a `WorkerGuard` when logging to a file; hold it until exit so
/// buffered lines are flushed.
pub fn init(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    match &config.log_file {
        Some(path) => {
            let (dir, file_name) = split_log_path(path)?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter(config.log_level()))
                .with_writer(writer)
                .with_ansi(false)
                .init();

            tracing::info!(log_file = %path.display(), "file logging initialized");
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter("warn"))
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// `RUST_LOG` wins over the level chosen on the command line
fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("timetracker={}", level)))
}

fn split_log_path(path: &Path) -> anyhow::Result<(&Path, &std::ffi::OsStr)> {
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((dir, file_name))
}
