//! Interactive dashboard module
//!
//! Keyboard mapping and the single loop that drives the timers.

pub mod event_loop;
pub mod keys;

// Re-export main items
pub use event_loop::{run_dashboard, ExitReason, LoopOptions, DEFAULT_TICK};
pub use keys::{command_for, Command};
