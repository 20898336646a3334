//! Note records and identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Default x position for a newly created note.
pub const DEFAULT_X: f64 = 50.0;
/// Default y position for a newly created note.
pub const DEFAULT_Y: f64 = 50.0;
/// Default width for a newly created note.
pub const DEFAULT_WIDTH: f64 = 260.0;
/// Default height for a newly created note.
pub const DEFAULT_HEIGHT: f64 = 200.0;

/// Unique identifier for a note.
///
/// Identifiers are assigned once at creation and never change. They are the
/// sole identity key for snapshot diffing and render-layer correlation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generates a fresh identifier: the current Unix time in hex
    /// milliseconds, followed by a random v4 UUID suffix.
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        Self(format!("{:x}-{}", millis, Uuid::new_v4().simple()))
    }

    /// Wraps an existing identifier string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single sticky note on the board.
///
/// Mutations replace fields in place; identity lives entirely in `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Immutable identity key.
    pub id: NoteId,
    /// Free-form text. No length constraint is enforced here.
    pub content: String,
    /// Top-left x in canvas coordinates. May be negative or exceed the
    /// viewport; nothing clamps it.
    pub x: f64,
    /// Top-left y in canvas coordinates.
    pub y: f64,
    /// Bounding-box width, same units as the position. No minimum is
    /// enforced here.
    pub width: f64,
    /// Bounding-box height.
    pub height: f64,
}

impl Note {
    /// Creates a note with explicit fields.
    pub fn new(
        id: NoteId,
        content: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an empty note with a fresh id and default geometry.
    pub fn with_defaults() -> Self {
        Self::new(
            NoteId::generate(),
            "",
            DEFAULT_X,
            DEFAULT_Y,
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
        )
    }
}
