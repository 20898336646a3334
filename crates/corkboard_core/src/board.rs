//! Board state: the authoritative local collection of notes.

use crate::error::{CoreError, CoreResult};
use crate::note::{Note, NoteId};

/// The complete in-memory ordered collection of note records.
///
/// Order reflects creation/remote order, not display priority. All ids are
/// unique. Rendering reads this state; local mutations and remote
/// reconciliation both write it. All operations are synchronous and run on
/// the single control thread, so no locking is involved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    notes: Vec<Note>,
}

impl BoardState {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the full note sequence.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the number of notes on the board.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true if the board holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns the note with the given id, if present.
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    /// Returns true if a note with the given id is present.
    pub fn contains(&self, id: &NoteId) -> bool {
        self.get(id).is_some()
    }

    /// Appends a note. Fails if a note with the same id already exists.
    pub fn add(&mut self, note: Note) -> CoreResult<()> {
        if self.contains(&note.id) {
            return Err(CoreError::DuplicateNote {
                id: note.id.to_string(),
            });
        }
        self.notes.push(note);
        Ok(())
    }

    /// Applies `mutator` to the note with the matching id.
    ///
    /// Returns true if a note matched; a miss is a no-op.
    pub fn upsert<F>(&mut self, id: &NoteId, mutator: F) -> bool
    where
        F: FnOnce(&mut Note),
    {
        match self.notes.iter_mut().find(|n| &n.id == id) {
            Some(note) => {
                mutator(note);
                true
            }
            None => false,
        }
    }

    /// Removes the note with the matching id.
    ///
    /// Returns true if a note was removed.
    pub fn remove(&mut self, id: &NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| &n.id != id);
        self.notes.len() != before
    }

    /// Swaps the entire sequence for `notes`.
    ///
    /// Reserved for reconciliation: the incoming remote snapshot replaces
    /// the board wholesale.
    pub fn replace_all(&mut self, notes: Vec<Note>) {
        self.notes = notes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_note(id: &str) -> Note {
        Note::new(NoteId::from_string(id), "", 0.0, 0.0, 260.0, 200.0)
    }

    #[test]
    fn add_and_get() {
        let mut board = BoardState::new();
        board.add(make_note("a")).unwrap();
        assert_eq!(board.len(), 1);
        assert!(board.contains(&NoteId::from_string("a")));
        assert!(!board.contains(&NoteId::from_string("b")));
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let mut board = BoardState::new();
        board.add(make_note("a")).unwrap();
        let err = board.add(make_note("a")).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateNote { .. }));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn upsert_mutates_matching_note() {
        let mut board = BoardState::new();
        board.add(make_note("a")).unwrap();

        let hit = board.upsert(&NoteId::from_string("a"), |n| {
            n.content = "edited".into();
        });
        assert!(hit);
        assert_eq!(board.get(&NoteId::from_string("a")).unwrap().content, "edited");
    }

    #[test]
    fn upsert_miss_is_noop() {
        let mut board = BoardState::new();
        board.add(make_note("a")).unwrap();

        let hit = board.upsert(&NoteId::from_string("b"), |n| {
            n.content = "edited".into();
        });
        assert!(!hit);
        assert_eq!(board.get(&NoteId::from_string("a")).unwrap().content, "");
    }

    #[test]
    fn remove_filters_by_id() {
        let mut board = BoardState::new();
        board.add(make_note("a")).unwrap();
        board.add(make_note("b")).unwrap();

        assert!(board.remove(&NoteId::from_string("a")));
        assert!(!board.remove(&NoteId::from_string("a")));
        assert_eq!(board.len(), 1);
        assert!(board.contains(&NoteId::from_string("b")));
    }

    #[test]
    fn replace_all_swaps_sequence() {
        let mut board = BoardState::new();
        board.add(make_note("a")).unwrap();

        board.replace_all(vec![make_note("b"), make_note("c")]);
        assert_eq!(board.len(), 2);
        assert!(!board.contains(&NoteId::from_string("a")));
    }

    #[test]
    fn order_is_preserved() {
        let mut board = BoardState::new();
        board.add(make_note("a")).unwrap();
        board.add(make_note("b")).unwrap();
        board.add(make_note("c")).unwrap();

        let ids: Vec<&str> = board.notes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
