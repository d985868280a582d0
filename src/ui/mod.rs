//! Terminal user interface module
//!
//! Terminal acquisition/release and the dashboard painter.

pub mod dashboard;
pub mod terminal;

// Re-export main types
pub use dashboard::{format_remaining, render, Dashboard, Palette, TimerRow};
pub use terminal::TerminalGuard;
