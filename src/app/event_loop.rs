//! The render/dispatch loop

use std::{io, time::Duration};

use crossterm::event::Event;
use futures::{Stream, StreamExt};
use ratatui::{backend::Backend, Terminal};
use tokio::time::sleep;
use tracing::{debug, info};

use super::keys::{command_for, Command};
use crate::{
    state::Registry,
    ui::{render, Dashboard, Palette},
    utils::Clock,
};

/// Longest wait for a keypress before the dashboard redraws
pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

/// Tick length and styling for one dashboard run
#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    pub tick: Duration,
    pub palette: Palette,
}

impl LoopOptions {
    /// Default one-second tick with the given palette
    pub fn new(palette: Palette) -> Self {
        Self {
            tick: DEFAULT_TICK,
            palette,
        }
    }
}

/// Why the dashboard stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    QuitKey,
    Signal(i32),
}

/// Draw, wait up to one tick for input, act on it, repeat.
///
/// Each pass samples the clock once, applies passive expiry and paints every
/// timer from that single instant. Returns when the quit key or a shutdown
/// signal arrives; input or drawing failures end the loop with an error.
pub async fn run_dashboard<B, E, S, C>(
    terminal: &mut Terminal<B>,
    events: &mut E,
    shutdown: &mut S,
    registry: &mut Registry,
    clock: &C,
    options: LoopOptions,
) -> io::Result<ExitReason>
where
    B: Backend,
    E: Stream<Item = io::Result<Event>> + Unpin,
    S: Stream<Item = i32> + Unpin,
    C: Clock + ?Sized,
{
    info!(timers = registry.len(), tick = ?options.tick, "Starting dashboard loop");

    loop {
        let now = clock.now();
        registry.tick(now);
        let dashboard = Dashboard::capture(registry, now);
        terminal.draw(|frame| render(frame, &dashboard, options.palette))?;

        let event = tokio::select! {
            event = events.next() => event,
            Some(signal) = shutdown.next() => {
                info!(signal, "Shutdown signal received");
                return Ok(ExitReason::Signal(signal));
            }
            _ = sleep(options.tick) => continue,
        };

        match event {
            Some(Ok(Event::Key(key))) => match command_for(&key) {
                Command::Quit => {
                    info!("Quit key pressed");
                    return Ok(ExitReason::QuitKey);
                }
                Command::Dispatch(key) => {
                    registry.dispatch(key, clock.now());
                }
                Command::Ignore => debug!(?key, "Ignoring key"),
            },
            // Resize, focus and mouse events just trigger a redraw.
            Some(Ok(other)) => debug!(?other, "Redrawing after terminal event"),
            Some(Err(e)) => return Err(e),
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "terminal input stream closed",
                ))
            }
        }
    }
}
