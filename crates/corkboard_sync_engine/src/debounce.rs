//! Trailing-edge write debouncing.

use crate::clock::Deadline;
use std::time::{Duration, Instant};

/// Coalesces bursts of mutations into a single delayed write.
///
/// Each [`schedule`](DebouncedWriter::schedule) restarts the countdown, so
/// the write fires only after a full quiet period: per-keystroke edits and
/// per-frame drag updates collapse into one remote write carrying the last
/// state. Structural changes cancel the countdown and write immediately
/// instead.
#[derive(Debug)]
pub struct DebouncedWriter {
    delay: Duration,
    deadline: Deadline,
}

impl DebouncedWriter {
    /// Creates a writer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: Deadline::new(),
        }
    }

    /// Returns the configured quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// (Re)starts the countdown from `now`. The last call wins.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline.arm(now + self.delay);
    }

    /// Cancels any pending write. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.cancel()
    }

    /// Returns true while a write is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_armed()
    }

    /// Disarms and reports whether the countdown has expired at `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        self.deadline.take_due(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};

    #[test]
    fn countdown_restarts_on_each_schedule() {
        let clock = ManualClock::new();
        let mut writer = DebouncedWriter::new(Duration::from_millis(400));

        writer.schedule(clock.now());
        clock.advance(Duration::from_millis(300));
        writer.schedule(clock.now());

        clock.advance(Duration::from_millis(300));
        assert!(!writer.take_due(clock.now()));

        clock.advance(Duration::from_millis(100));
        assert!(writer.take_due(clock.now()));
    }

    #[test]
    fn cancel_drops_pending_write() {
        let clock = ManualClock::new();
        let mut writer = DebouncedWriter::new(Duration::from_millis(400));

        writer.schedule(clock.now());
        assert!(writer.is_pending());
        assert!(writer.cancel());

        clock.advance(Duration::from_secs(1));
        assert!(!writer.take_due(clock.now()));
    }

    #[test]
    fn take_due_fires_once() {
        let clock = ManualClock::new();
        let mut writer = DebouncedWriter::new(Duration::from_millis(400));

        writer.schedule(clock.now());
        clock.advance(Duration::from_millis(400));
        assert!(writer.take_due(clock.now()));
        assert!(!writer.take_due(clock.now()));
    }
}
