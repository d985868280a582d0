//! Key event to dashboard command mapping

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a keypress asks the dashboard to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// A plain character for the registry to route to its timer slot
    Dispatch(char),
    Ignore,
}

/// Classify a terminal key event; only presses act
pub fn command_for(key: &KeyEvent) -> Command {
    if key.kind != KeyEventKind::Press {
        return Command::Ignore;
    }

    match key.code {
        // Raw mode turns Ctrl-C into a key instead of SIGINT.
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            Command::Quit
        }
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            Command::Dispatch(c)
        }
        _ => Command::Ignore,
    }
}
