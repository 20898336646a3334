//! Shared test fixtures.

use corkboard_core::{Note, NoteId, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use corkboard_sync_engine::RenderSink;

/// Builds a note with default geometry.
pub fn note(id: &str, content: &str) -> Note {
    note_at(id, content, 50.0, 50.0)
}

/// Builds a note at an explicit position.
pub fn note_at(id: &str, content: &str, x: f64, y: f64) -> Note {
    Note::new(
        NoteId::from_string(id),
        content,
        x,
        y,
        DEFAULT_WIDTH,
        DEFAULT_HEIGHT,
    )
}

/// A render sink that records every redraw and loading transition.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Each redraw's full note set, in order.
    pub renders: Vec<Vec<Note>>,
    /// Loading-indicator transitions, in order.
    pub loading: Vec<bool>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of redraws so far.
    pub fn render_count(&self) -> usize {
        self.renders.len()
    }

    /// Returns the most recently rendered note set.
    pub fn last_render(&self) -> Option<&[Note]> {
        self.renders.last().map(|notes| notes.as_slice())
    }
}

impl RenderSink for RecordingSink {
    fn render_notes(&mut self, notes: &[Note]) {
        self.renders.push(notes.to_vec());
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading.push(loading);
    }
}
