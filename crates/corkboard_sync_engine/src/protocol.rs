//! Wire documents for the remote snapshot store.
//!
//! The protocol is full-replace: every read returns the complete note set
//! and every write transmits it. No diffing, no merge-by-field; the
//! simplicity buys consistency at the cost of letting one stale write
//! clobber the whole document.

use crate::error::{SyncError, SyncResult};
use corkboard_core::Note;
use serde::{Deserialize, Serialize};

/// Status literal the store reports for an accepted write.
pub const STATUS_SUCCESS: &str = "success";

/// The snapshot document exchanged on reads and writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    /// The complete note set.
    pub notes: Vec<Note>,
}

impl SnapshotDocument {
    /// Wraps a note set.
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Encodes to a JSON body.
    pub fn encode(&self) -> SyncResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| SyncError::decode(e.to_string()))
    }

    /// Decodes from a JSON body.
    ///
    /// A body whose `notes` field is missing or not a sequence fails to
    /// decode; callers must treat that as "no data" and keep their current
    /// state.
    pub fn decode(bytes: &[u8]) -> SyncResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| SyncError::decode(e.to_string()))
    }
}

/// Acknowledgement document the store returns for a write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteResponse {
    /// `"success"` for an accepted write; any other literal is a
    /// rejection.
    pub status: String,
}

impl WriteResponse {
    /// Creates a success acknowledgement.
    pub fn success() -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
        }
    }

    /// Creates a rejection with the given status literal.
    pub fn rejected(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }

    /// Returns true if the store accepted the write.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Encodes to a JSON body.
    pub fn encode(&self) -> SyncResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| SyncError::decode(e.to_string()))
    }

    /// Decodes from a JSON body.
    pub fn decode(bytes: &[u8]) -> SyncResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| SyncError::decode(e.to_string()))
    }
}
