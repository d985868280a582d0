//! Utility functions module
//!
//! This module contains the clock, logging and signal helpers used throughout
//! the application.

pub mod clock;
pub mod logging;
pub mod signals;

// Re-export main items
pub use clock::{Clock, ManualClock, SystemClock};
pub use signals::shutdown_signals;
