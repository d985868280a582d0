//! Ordered, fixed-size collection of timers addressed by keyboard slot

use thiserror::Error;
use tracing::{debug, info};

use super::{Timer, TimerState};

/// Upper bound on the number of timers a file may define
pub const MAX_TIMERS: usize = 20;

/// Keys that address timers, in slot order: `1`-`9`, `0`, then `a`-`j`
const SLOT_KEYS: [char; MAX_TIMERS] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
    'i', 'j',
];

/// Zero-based slot addressed by a key, if the key addresses one
pub fn slot_for(key: char) -> Option<usize> {
    SLOT_KEYS.iter().position(|&k| k == key)
}

/// Key shown next to (and toggling) the timer in `slot`
pub fn slot_label(slot: usize) -> Option<char> {
    SLOT_KEYS.get(slot).copied()
}

/// Why a set of timers cannot form a registry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no timetrackers found")]
    Empty,

    #[error("too many timetrackers: {found} found, at most {max} allowed")]
    TooMany { found: usize, max: usize },
}

/// All loaded timers, in file order. Never grows or shrinks after creation.
#[derive(Debug, Clone)]
pub struct Registry {
    timers: Vec<Timer>,
}

impl Registry {
    /// Create a registry, rejecting an empty or over-capacity set
    pub fn new(timers: Vec<Timer>) -> Result<Self, RegistryError> {
        if timers.is_empty() {
            return Err(RegistryError::Empty);
        }
        if timers.len() > MAX_TIMERS {
            return Err(RegistryError::TooMany {
                found: timers.len(),
                max: MAX_TIMERS,
            });
        }
        Ok(Self { timers })
    }

    /// Number of loaded timers
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Always `false` for a registry built by `new`
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Timer in the zero-based `slot`, if loaded
    pub fn get(&self, slot: usize) -> Option<&Timer> {
        self.timers.get(slot)
    }

    /// Timers in display order
    pub fn iter(&self) -> impl Iterator<Item = &Timer> {
        self.timers.iter()
    }

    /// Toggle the timer in `slot`. Out-of-range slots are ignored.
    pub fn toggle(&mut self, slot: usize, now: u64) -> Option<&Timer> {
        let loaded = self.timers.len();
        let Some(timer) = self.timers.get_mut(slot) else {
            debug!(slot, loaded, "ignoring toggle for empty slot");
            return None;
        };

        match timer.toggle(now) {
            TimerState::Running { finish_at } => {
                info!(slot, name = timer.name(), finish_at, "timer started");
            }
            TimerState::Stopped { remaining_seconds } => {
                info!(slot, name = timer.name(), remaining_seconds, "timer stopped");
            }
        }
        Some(timer)
    }

    /// Route a keypress to the timer it addresses.
    ///
    /// Keys that address no slot, or a slot past the loaded timers, are ignored.
    pub fn dispatch(&mut self, key: char, now: u64) -> Option<&Timer> {
        let slot = slot_for(key)?;
        self.toggle(slot, now)
    }

    /// Apply passive expiry to every timer at one instant.
    /// Returns how many timers reached zero during this pass.
    pub fn tick(&mut self, now: u64) -> usize {
        let mut expired = 0;
        for (slot, timer) in self.timers.iter_mut().enumerate() {
            if timer.expire_if_due(now) {
                info!(slot, name = timer.name(), "timer reached zero");
                expired += 1;
            }
        }
        expired
    }
}
