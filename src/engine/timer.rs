//! Timer queue with deterministic ordering and batch cancellation.
//!
//! Implements a priority queue that ensures:
//! - Timers fire in due-time order
//! - Ties are broken by insertion order (sequence number)
//! - Cancellation drops every outstanding timer in one operation
//!
//! The queue is owned by the sequencer instance. There is no ambient or
//! global timer registry; `cancel_all` is the single cancellation path.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::engine::PlayTime;

/// Events the sequencer schedules against the playback clock.
///
/// One variant per suspension point of the step pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    /// Inter-step delay elapsed; begin the typing phase.
    BeginTyping,
    /// Typing cadence tick; append the next character.
    TypeTick,
    /// Post-typing pause elapsed; execute the typed command.
    Execute,
    /// Inter-step pause elapsed; move to the next step.
    AdvanceStep,
}

/// A scheduled timer with due time and sequence number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScheduledTimer {
    /// Time at which the timer fires.
    pub due: PlayTime,
    /// Sequence number for deterministic tie-breaking.
    pub sequence: u64,
    /// The event to dispatch.
    pub event: TimerEvent,
}

impl ScheduledTimer {
    /// Create a new scheduled timer.
    #[must_use]
    pub const fn new(due: PlayTime, sequence: u64, event: TimerEvent) -> Self {
        Self {
            due,
            sequence,
            event,
        }
    }
}

// Custom ordering for BinaryHeap (min-heap by due time, then sequence)
impl PartialEq for ScheduledTimer {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.sequence == other.sequence
    }
}

impl Eq for ScheduledTimer {}

impl PartialOrd for ScheduledTimer {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledTimer {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.due.cmp(&other.due) {
            std::cmp::Ordering::Equal => self.sequence.cmp(&other.sequence),
            ord => ord,
        }
    }
}

/// Owned collection of outstanding timers.
///
/// Tracks every timer the sequencer creates so that `stop()` can cancel
/// the whole batch atomically, never just the most recent one.
#[derive(Debug, Default)]
pub struct TimerQueue {
    /// Min-heap ordered by (due, sequence).
    queue: BinaryHeap<Reverse<ScheduledTimer>>,
    /// Monotonic sequence counter for tie-breaking.
    sequence: u64,
}

impl TimerQueue {
    /// Create a new empty timer queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an event at the given time.
    pub fn schedule(&mut self, due: PlayTime, event: TimerEvent) {
        let seq = self.sequence;
        self.sequence += 1;

        self.queue.push(Reverse(ScheduledTimer::new(due, seq, event)));
    }

    /// Pop the next timer if it is due at or before the given time.
    #[must_use]
    pub fn pop_due(&mut self, now: PlayTime) -> Option<ScheduledTimer> {
        if let Some(Reverse(t)) = self.queue.peek() {
            if t.due <= now {
                return self.queue.pop().map(|Reverse(t)| t);
            }
        }
        None
    }

    /// Get the due time of the next timer, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<PlayTime> {
        self.queue.peek().map(|Reverse(t)| t.due)
    }

    /// Cancel every outstanding timer as a single batch.
    pub fn cancel_all(&mut self) {
        self.queue.clear();
    }

    /// Check if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Get the number of outstanding timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
