//! Poll scheduling with guard-based suppression.

use crate::state::SyncState;
use std::time::{Duration, Instant};

/// Why a due poll tick did not issue a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A snapshot write has not settled yet.
    WriteInFlight,
    /// A previous fetch has not settled yet.
    FetchInFlight,
    /// A note is held under an active gesture.
    Interacting,
    /// The last local write is still inside the grace window.
    RecentWrite,
}

/// Outcome of evaluating a poll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollDecision {
    /// The interval has not elapsed (or the scheduler is stopped).
    NotDue,
    /// Issue a reconciliation fetch.
    Fetch,
    /// The tick was due but a guard suppressed it.
    Skipped(SkipReason),
}

/// Drives periodic reconciliation reads without colliding with local
/// edits.
///
/// A suppressed tick is skipped outright: the fetch is never issued, so
/// there is nothing to abort. The schedule re-arms on every due tick
/// whether or not it was suppressed.
#[derive(Debug)]
pub struct PollScheduler {
    interval: Duration,
    next_due: Option<Instant>,
}

impl PollScheduler {
    /// Creates a scheduler that stays idle until
    /// [`schedule_next`](PollScheduler::schedule_next) is called.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Returns the configured interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arms the next tick at `now + interval`.
    pub fn schedule_next(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Stops future ticks.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Evaluates a tick at `now` against the current sync state.
    pub fn decide(&mut self, now: Instant, sync: &SyncState, grace: Duration) -> PollDecision {
        let Some(due) = self.next_due else {
            return PollDecision::NotDue;
        };
        if now < due {
            return PollDecision::NotDue;
        }
        self.next_due = Some(now + self.interval);

        if sync.write_in_flight {
            return PollDecision::Skipped(SkipReason::WriteInFlight);
        }
        if sync.fetch_in_flight {
            return PollDecision::Skipped(SkipReason::FetchInFlight);
        }
        if sync.is_interacting() {
            return PollDecision::Skipped(SkipReason::Interacting);
        }
        if sync.within_grace_window(now, grace) {
            return PollDecision::Skipped(SkipReason::RecentWrite);
        }
        PollDecision::Fetch
    }
}
