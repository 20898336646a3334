//! Typed gesture commands from the interaction boundary.

use crate::note::NoteId;

/// Pointer gesture classes that hold a note live under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// The note is being moved.
    Drag,
    /// The note is being resized.
    Resize,
}

/// A gesture or edit reported by the render layer.
///
/// The render layer translates raw pointer and input events into these
/// commands; a single coordinator consumes them. Dispatching typed values
/// instead of wiring callbacks keeps the interaction path deterministic
/// under test, with no live render layer required.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardCommand {
    /// Create a new note with default geometry.
    Create,
    /// Delete the note with the given id.
    Delete {
        /// The note to delete.
        id: NoteId,
    },
    /// Replace a note's text content.
    ContentChanged {
        /// The edited note.
        id: NoteId,
        /// The full new text.
        content: String,
    },
    /// Move a note to a new top-left position.
    Moved {
        /// The moved note.
        id: NoteId,
        /// New x coordinate.
        x: f64,
        /// New y coordinate.
        y: f64,
    },
    /// Resize a note's bounding box.
    Resized {
        /// The resized note.
        id: NoteId,
        /// New width.
        width: f64,
        /// New height.
        height: f64,
    },
    /// Mark a note as the current selection.
    Selected {
        /// The selected note.
        id: NoteId,
    },
    /// A drag or resize gesture began on a note.
    DragStarted {
        /// The note under the gesture.
        id: NoteId,
        /// Drag or resize.
        kind: GestureKind,
    },
    /// The active gesture ended.
    DragEnded,
}
