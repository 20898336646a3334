//! Sync-side state shared by the write and poll paths.

use corkboard_core::{GestureKind, NoteId};
use std::time::{Duration, Instant};

/// A note currently held by an active pointer gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    /// The note under the gesture.
    pub note_id: NoteId,
    /// Drag or resize.
    pub kind: GestureKind,
}

/// Flags governing whether remote snapshots may be fetched and applied.
///
/// Owned by the engine; there is exactly one of these per board and it is
/// only ever touched on the control thread.
#[derive(Debug, Default)]
pub struct SyncState {
    /// When the last successful local write completed.
    pub last_local_write_at: Option<Instant>,
    /// A snapshot write has been issued and has not settled.
    pub write_in_flight: bool,
    /// A snapshot fetch has been issued and has not settled.
    pub fetch_in_flight: bool,
    /// The active pointer gesture, if any.
    pub interaction: Option<Interaction>,
}

impl SyncState {
    /// Creates idle sync state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a note is held under a drag or resize gesture.
    pub fn is_interacting(&self) -> bool {
        self.interaction.is_some()
    }

    /// Returns true if `now` still falls inside the grace window after the
    /// last successful write.
    pub fn within_grace_window(&self, now: Instant, grace: Duration) -> bool {
        match self.last_local_write_at {
            Some(at) => now.duration_since(at) < grace,
            None => false,
        }
    }
}
