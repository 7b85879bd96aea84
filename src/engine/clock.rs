//! Playback clock management.
//!
//! The clock owns the virtual time axis for one playback run. The engine
//! never reads wall time; a driver advances the clock explicitly, which
//! keeps every run exactly reproducible and testable without sleeping.

use serde::{Deserialize, Serialize};

use crate::engine::PlayTime;

/// Playback clock.
///
/// Tracks the current virtual time of a playback run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayClock {
    /// Current playback time.
    current: PlayTime,
}

impl PlayClock {
    /// Create a new clock at playback start.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current playback time.
    #[must_use]
    pub const fn now(&self) -> PlayTime {
        self.current
    }

    /// Advance the clock by a duration in milliseconds.
    ///
    /// Returns the new time.
    pub fn advance(&mut self, millis: u64) -> PlayTime {
        self.current = self.current.add_millis(millis);
        self.current
    }

    /// Move the clock forward to a target time.
    ///
    /// Times in the past are ignored; the clock never runs backwards.
    pub fn advance_to(&mut self, target: PlayTime) -> PlayTime {
        if target > self.current {
            self.current = target;
        }
        self.current
    }

    /// Reset the clock to playback start.
    pub fn reset(&mut self) {
        self.current = PlayTime::ZERO;
    }
}
