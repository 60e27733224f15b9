//! Fixed-interval tick clock.

use std::time::{Duration, Instant};

/// Schedules ticks every `interval`, driven by caller-supplied instants.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
}

impl Ticker {
    /// First tick is due one interval after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next tick; zero once it is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Returns true (once) when a tick is due and schedules the next one.
    ///
    /// A loop that fell more than one interval behind restarts the schedule
    /// from `now` instead of firing a burst of catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }
        true
    }
}
