//! Playback engine.
//!
//! Implements the tutorial sequencer and its supporting pieces:
//! - A fixed-point virtual time axis ([`PlayTime`])
//! - A playback clock ([`PlayClock`])
//! - An owned timer queue with deterministic ordering and batch
//!   cancellation ([`TimerQueue`])
//! - The step sequencer itself ([`Sequencer`])

pub mod clock;
pub mod sequencer;
pub mod timer;

use serde::{Deserialize, Serialize};

pub use clock::PlayClock;
pub use sequencer::{Phase, Sequencer, TerminalHost};
pub use timer::{ScheduledTimer, TimerEvent, TimerQueue};

/// Playback time representation.
///
/// Time elapsed since playback start, in whole milliseconds. All pacing
/// in the reference behavior is millisecond-grained, so an integer axis
/// keeps playback exactly reproducible across platforms.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct PlayTime {
    /// Milliseconds from playback start.
    millis: u64,
}

impl PlayTime {
    /// Zero time (playback start).
    pub const ZERO: Self = Self { millis: 0 };

    /// Create time from milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Get time as milliseconds.
    #[must_use]
    pub const fn as_millis(&self) -> u64 {
        self.millis
    }

    /// Add a duration in milliseconds, saturating at the end of the
    /// time axis. Playback is infallible, so pathological durations
    /// must not be able to wrap the clock.
    #[must_use]
    pub const fn add_millis(self, millis: u64) -> Self {
        Self {
            millis: self.millis.saturating_add(millis),
        }
    }

    /// Subtract another time, saturating at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self {
            millis: self.millis.saturating_sub(other.millis),
        }
    }
}

impl std::ops::Add for PlayTime {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            millis: self.millis.saturating_add(rhs.millis),
        }
    }
}

impl std::fmt::Display for PlayTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.millis)
    }
}
