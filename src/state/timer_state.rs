//! Timer state structure and management

/// Where a timer's remaining time comes from.
///
/// A stopped timer owns a countdown budget; a running timer owns an absolute
/// deadline on the wall clock. Only one of the two exists at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Stopped { remaining_seconds: u64 },
    Running { finish_at: u64 },
}

/// A named countdown toggled on and off from the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    name: String,
    state: TimerState,
}

impl Timer {
    /// Create a stopped timer with the given budget
    pub fn new(name: impl Into<String>, remaining_seconds: u64) -> Self {
        Self {
            name: name.into(),
            state: TimerState::Stopped { remaining_seconds },
        }
    }

    /// Display label from the timer file
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current state, including whichever time field is authoritative
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Check if the timer is counting down
    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// Start counting down. Returns `false` if the timer was already running.
    pub fn start(&mut self, now: u64) -> bool {
        match self.state {
            TimerState::Running { .. } => false,
            TimerState::Stopped { remaining_seconds } => {
                self.state = TimerState::Running {
                    finish_at: now.saturating_add(remaining_seconds),
                };
                true
            }
        }
    }

    /// Stop counting down, keeping whatever time was left.
    /// Returns `false` if the timer was already stopped.
    pub fn stop(&mut self, now: u64) -> bool {
        match self.state {
            TimerState::Stopped { .. } => false,
            TimerState::Running { finish_at } => {
                self.state = TimerState::Stopped {
                    remaining_seconds: finish_at.saturating_sub(now),
                };
                true
            }
        }
    }

    /// Flip between running and stopped, returning the new state
    pub fn toggle(&mut self, now: u64) -> TimerState {
        if self.is_running() {
            self.stop(now);
        } else {
            self.start(now);
        }
        self.state
    }

    /// Seconds left at `now`, never negative. Does not change the timer.
    pub fn remaining(&self, now: u64) -> u64 {
        match self.state {
            TimerState::Stopped { remaining_seconds } => remaining_seconds,
            TimerState::Running { finish_at } => finish_at.saturating_sub(now),
        }
    }

    /// Passive expiry: a running timer whose deadline has passed stops at zero.
    /// Returns `true` if this call performed the transition.
    pub fn expire_if_due(&mut self, now: u64) -> bool {
        match self.state {
            TimerState::Running { finish_at } if finish_at <= now => {
                self.state = TimerState::Stopped { remaining_seconds: 0 };
                true
            }
            _ => false,
        }
    }

    /// `remaining` preceded by passive expiry, as a redraw sees it
    pub fn tick(&mut self, now: u64) -> u64 {
        self.expire_if_due(now);
        self.remaining(now)
    }
}
