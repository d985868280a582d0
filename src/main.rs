//! Timetracker - a terminal dashboard of named countdown timers
//!
//! This is the main entry point for the timetracker application.

use std::process::ExitCode;

use anyhow::Context;
use crossterm::event::EventStream;
use tracing::info;

use timetracker::{
    app::{run_dashboard, ExitReason, LoopOptions},
    config::Config,
    loader::load_registry,
    ui::TerminalGuard,
    utils::{logging, shutdown_signals, SystemClock},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = Config::parse();

    // Hold the guard so buffered log lines are flushed on exit
    let _log_guard = match logging::init(&config) {
        Ok(guard) => guard,
        Err(e) => return fail(&e),
    };

    match run(&config).await {
        Ok(reason) => {
            info!(?reason, "Timetracker shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            info!(error = %format!("{e:#}"), "Timetracker exiting with error");
            fail(&e)
        }
    }
}

/// Report a fatal error once the terminal is back to normal
fn fail(error: &anyhow::Error) -> ExitCode {
    eprintln!("error: {error:#}");
    ExitCode::from(1)
}

async fn run(config: &Config) -> anyhow::Result<ExitReason> {
    info!("Starting timetracker v2.0.0");
    info!(
        "Configuration: file={}, units={}, color={}",
        config.file.display(),
        config.units,
        !config.no_color
    );

    let mut registry =
        load_registry(&config.file, config.units).context("error initializing timetrackers")?;

    let mut shutdown = shutdown_signals().context("failed to install signal handlers")?;

    // The terminal is restored when the guard drops, before the caller reports anything
    let mut terminal = TerminalGuard::acquire().context("error initializing the terminal")?;
    let mut events = EventStream::new();

    run_dashboard(
        &mut *terminal,
        &mut events,
        &mut shutdown,
        &mut registry,
        &SystemClock,
        LoopOptions::new(config.palette()),
    )
    .await
    .context("dashboard failed")
}
