//! # Corkboard Core
//!
//! Core board model for Corkboard.
//!
//! This crate provides:
//! - Note records and identifier generation
//! - Board state, the authoritative local note collection
//! - Typed gesture commands from the interaction boundary
//! - Theme preference round-tripping

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod board;
mod command;
mod error;
mod note;
mod theme;

pub use board::BoardState;
pub use command::{BoardCommand, GestureKind};
pub use error::{CoreError, CoreResult};
pub use note::{Note, NoteId, DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_X, DEFAULT_Y};
pub use theme::{FilePreferenceStore, PreferenceStore, Theme};
