//! Clock and deadline primitives for the cooperative scheduler.
//!
//! The engine never reads wall-clock time directly: every timer is a
//! [`Deadline`] evaluated against an injected [`Clock`], so debounce and
//! poll behavior is testable without real waits.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of the engine's notion of now.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A manually advanced clock for deterministic tests.
///
/// Clones share the same underlying time, so a test can hold one handle
/// while the engine owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl ManualClock {
    /// Creates a clock pinned at an arbitrary base instant.
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Advances the shared time by `delta`.
    pub fn advance(&self, delta: Duration) {
        *self.offset.lock() += delta;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock()
    }
}

/// A cancellable delayed-task deadline.
///
/// Re-arming replaces the pending fire time; the last call wins.
#[derive(Debug, Default)]
pub struct Deadline {
    fire_at: Option<Instant>,
}

impl Deadline {
    /// Creates an unarmed deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms (or re-arms) the deadline to fire at `at`.
    pub fn arm(&mut self, at: Instant) {
        self.fire_at = Some(at);
    }

    /// Cancels the deadline. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.fire_at.take().is_some()
    }

    /// Returns true if a fire time is pending.
    pub fn is_armed(&self) -> bool {
        self.fire_at.is_some()
    }

    /// Returns true if armed and `now` has reached the fire time.
    pub fn is_due(&self, now: Instant) -> bool {
        matches!(self.fire_at, Some(at) if now >= at)
    }

    /// Disarms and reports whether the deadline was due at `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.fire_at = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances_shared_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        let start = clock.now();

        handle.advance(Duration::from_millis(500));
        assert_eq!(clock.now(), start + Duration::from_millis(500));
    }

    #[test]
    fn deadline_fires_at_or_after_arm_time() {
        let clock = ManualClock::new();
        let mut deadline = Deadline::new();
        deadline.arm(clock.now() + Duration::from_millis(100));

        assert!(!deadline.is_due(clock.now()));
        clock.advance(Duration::from_millis(100));
        assert!(deadline.is_due(clock.now()));
    }

    #[test]
    fn rearm_replaces_fire_time() {
        let clock = ManualClock::new();
        let mut deadline = Deadline::new();
        deadline.arm(clock.now() + Duration::from_millis(100));

        clock.advance(Duration::from_millis(80));
        deadline.arm(clock.now() + Duration::from_millis(100));

        clock.advance(Duration::from_millis(50));
        assert!(!deadline.is_due(clock.now()));
        clock.advance(Duration::from_millis(50));
        assert!(deadline.is_due(clock.now()));
    }

    #[test]
    fn cancel_disarms() {
        let clock = ManualClock::new();
        let mut deadline = Deadline::new();
        deadline.arm(clock.now());

        assert!(deadline.cancel());
        assert!(!deadline.cancel());
        assert!(!deadline.is_due(clock.now()));
    }

    #[test]
    fn take_due_disarms_once() {
        let clock = ManualClock::new();
        let mut deadline = Deadline::new();
        deadline.arm(clock.now() + Duration::from_millis(10));

        clock.advance(Duration::from_millis(10));
        assert!(deadline.take_due(clock.now()));
        assert!(!deadline.take_due(clock.now()));
        assert!(!deadline.is_armed());
    }
}
