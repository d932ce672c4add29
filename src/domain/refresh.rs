//! Refresh loop state

use std::fmt;

/// Refresh loop states.
///
/// There is no error state: a failed fetch returns straight to idle.
///
/// State machine:
///   IDLE -> FETCHING (tick)
///   FETCHING -> IDLE (fetch succeeded or failed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefreshState {
    #[default]
    Idle,
    Fetching,
}

impl RefreshState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
        }
    }
}

impl fmt::Display for RefreshState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tracks fetches in flight.
///
/// Ticks may overlap, so the loop is fetching while at least one tick
/// has started and not yet finished.
#[derive(Debug, Default)]
pub struct RefreshSession {
    in_flight: usize,
}

impl RefreshSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state
    pub fn state(&self) -> RefreshState {
        if self.in_flight > 0 {
            RefreshState::Fetching
        } else {
            RefreshState::Idle
        }
    }

    /// Number of ticks currently awaiting the host
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// IDLE/FETCHING -> FETCHING
    pub fn begin_fetch(&mut self) {
        self.in_flight += 1;
    }

    /// Finish one fetch; IDLE once none remain
    pub fn finish_fetch(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}
