//! State management module
//!
//! This module contains the timer state machine and the registry that holds
//! every loaded timer.

pub mod registry;
pub mod timer_state;

// Re-export main types
pub use registry::{slot_for, slot_label, Registry, RegistryError, MAX_TIMERS};
pub use timer_state::{Timer, TimerState};
