//! Timetracker - a terminal dashboard of named countdown timers
//!
//! This library loads timers from a text file, keeps their start/stop
//! bookkeeping against the wall clock and drives the full-screen dashboard
//! that toggles them from the keyboard.

pub mod app;
pub mod config;
pub mod loader;
pub mod state;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::{run_dashboard, ExitReason, LoopOptions};
pub use config::Config;
pub use loader::{load_registry, LoadError, Units};
pub use state::{Registry, Timer, TimerState};
pub use utils::{Clock, SystemClock};
