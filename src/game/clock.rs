//! Monotonic time sources for the frame loop.

use std::cell::Cell;
use std::time::{Duration, Instant};

use crate::core::types::Millis;

/// A monotonically increasing millisecond clock.
pub trait Clock {
    fn now(&self) -> Millis;
}

/// Wall-independent clock measuring time since construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Millis {
        duration_to_millis(self.epoch.elapsed())
    }
}

/// Hand-driven clock for deterministic tests and replays.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, millis: Millis) {
        self.now.set(self.now.get().saturating_add(millis));
    }

    /// Jump to an absolute reading; readings never go backwards.
    pub fn set(&self, millis: Millis) {
        self.now.set(self.now.get().max(millis));
    }
}

/// Whole milliseconds in `duration`, saturating at `Millis::MAX`
fn duration_to_millis(duration: Duration) -> Millis {
    Millis::try_from(duration.as_millis()).unwrap_or(Millis::MAX)
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        self.now.get()
    }
}
