//! Error types for the board core.

use std::io;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in board core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A note with the same id already exists on the board.
    #[error("duplicate note id: {id}")]
    DuplicateNote {
        /// The offending id.
        id: String,
    },

    /// Preference storage I/O failed.
    #[error("preference store error: {0}")]
    Preference(#[from] io::Error),

    /// A stored theme value is not a known theme literal.
    #[error("invalid theme value: {value:?}")]
    InvalidTheme {
        /// The unrecognized literal.
        value: String,
    },
}
