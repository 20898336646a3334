//! Reconciliation of remote snapshots into board state.

use crate::state::Interaction;
use corkboard_core::{BoardState, GestureKind, Note};

/// Outcome of a reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The snapshot differed and replaced the board.
    Applied,
    /// The snapshot was identical and was discarded.
    Unchanged,
}

/// Merges an incoming remote snapshot into the board.
///
/// An identical snapshot (same ids, same fields, same order) is discarded
/// so an unchanged remote never triggers a redraw. A differing snapshot
/// replaces the board wholesale — last write wins, per the full-replace
/// protocol.
///
/// Gesture guard: while a note is held under an active drag or resize, its
/// live geometry is spliced into the incoming entry with the matching id
/// before comparison, so an applied snapshot never yanks the note out from
/// under the pointer. Notes the snapshot no longer contains are removed
/// regardless.
pub fn reconcile(
    board: &mut BoardState,
    mut incoming: Vec<Note>,
    interaction: Option<&Interaction>,
) -> ReconcileOutcome {
    if let Some(gesture) = interaction {
        if let Some(local) = board.get(&gesture.note_id) {
            if let Some(entry) = incoming.iter_mut().find(|n| n.id == gesture.note_id) {
                match gesture.kind {
                    GestureKind::Drag => {
                        entry.x = local.x;
                        entry.y = local.y;
                    }
                    GestureKind::Resize => {
                        entry.width = local.width;
                        entry.height = local.height;
                    }
                }
            }
        }
    }

    if board.notes() == incoming.as_slice() {
        return ReconcileOutcome::Unchanged;
    }
    board.replace_all(incoming);
    ReconcileOutcome::Applied
}
