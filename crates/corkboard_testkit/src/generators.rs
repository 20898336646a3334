//! Property-based test generators using proptest.

use corkboard_core::{Note, NoteId};
use proptest::prelude::*;

/// Strategy for note identifier strings.
pub fn note_id_strategy() -> impl Strategy<Value = NoteId> {
    prop::string::string_regex("[0-9a-f]{8,12}-[0-9a-f]{16,32}")
        .expect("Invalid regex")
        .prop_map(NoteId::from_string)
}

/// Strategy for note content, including empty and multi-line text.
pub fn content_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("([ -~\n]{0,64})").expect("Invalid regex")
}

/// Strategy for canvas coordinates: negative and off-viewport values are
/// legal.
pub fn coordinate_strategy() -> impl Strategy<Value = f64> {
    (-5000i32..5000).prop_map(f64::from)
}

/// Strategy for note dimensions.
pub fn dimension_strategy() -> impl Strategy<Value = f64> {
    (1i32..2000).prop_map(f64::from)
}

/// Strategy for a single note.
pub fn note_strategy() -> impl Strategy<Value = Note> {
    (
        note_id_strategy(),
        content_strategy(),
        coordinate_strategy(),
        coordinate_strategy(),
        dimension_strategy(),
        dimension_strategy(),
    )
        .prop_map(|(id, content, x, y, width, height)| {
            Note::new(id, content, x, y, width, height)
        })
}

/// Strategy for a board snapshot with pairwise-distinct ids.
pub fn board_strategy(max_notes: usize) -> impl Strategy<Value = Vec<Note>> {
    prop::collection::vec(note_strategy(), 0..=max_notes).prop_map(|mut notes| {
        // Suffix the ids by index so the uniqueness invariant holds.
        for (index, note) in notes.iter_mut().enumerate() {
            note.id = NoteId::from_string(format!("{}-{}", note.id, index));
        }
        notes
    })
}
