//! Signal handling for graceful shutdown

use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::debug;

/// Subscribe to the signals that should end the dashboard (SIGTERM, SIGHUP, SIGINT).
///
/// The returned stream yields each signal number as it arrives, so the
/// dashboard loop can leave through its normal path and restore the terminal.
pub fn shutdown_signals() -> std::io::Result<Signals> {
    let signals = Signals::new([SIGTERM, SIGHUP, SIGINT])?;
    debug!("Shutdown signal handlers installed");
    Ok(signals)
}
