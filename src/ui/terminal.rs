//! Scoped ownership of the full-screen terminal

use std::io::{self, Stdout};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, warn};

pub type Backend = CrosstermBackend<Stdout>;

/// Raw mode + alternate screen for as long as the guard lives.
///
/// Dropping the guard puts the terminal back the way it was found, whether the
/// dashboard quit normally, returned an error or panicked.
pub struct TerminalGuard {
    terminal: Terminal<Backend>,
}

impl TerminalGuard {
    /// Take over the terminal
    pub fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = restore();
            return Err(e);
        }

        let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = restore();
                return Err(e);
            }
        };
        if let Err(e) = terminal.clear() {
            let _ = restore();
            return Err(e);
        }

        debug!("Terminal acquired");
        Ok(Self { terminal })
    }
}

impl std::ops::Deref for TerminalGuard {
    type Target = Terminal<Backend>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl std::ops::DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        match restore() {
            Ok(()) => debug!("Terminal restored"),
            Err(e) => warn!("Failed to restore terminal: {}", e),
        }
    }
}

fn restore() -> io::Result<()> {
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    // Leave raw mode even if the screen could not be switched back.
    disable_raw_mode()?;
    screen
}
