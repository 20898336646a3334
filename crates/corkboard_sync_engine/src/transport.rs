//! Transport abstraction over the remote snapshot store.

use crate::error::{SyncError, SyncResult};
use corkboard_core::Note;
use parking_lot::Mutex;
use std::collections::VecDeque;

/// Read/write access to the remote snapshot store.
///
/// The store is an opaque document endpoint: fetches return the complete
/// remote note set and writes replace it wholesale. Implementations exist
/// for HTTP and for in-process testing.
pub trait SnapshotTransport {
    /// Fetches the complete remote note set.
    ///
    /// A failure means "no update available"; the caller retains its
    /// current state.
    fn fetch_snapshot(&self) -> SyncResult<Vec<Note>>;

    /// Replaces the remote note set with `notes`.
    fn write_snapshot(&self, notes: &[Note]) -> SyncResult<()>;
}

/// A scripted transport for engine tests.
///
/// Fetch and write outcomes are queued ahead of time and consumed in
/// order. Every write's payload is recorded. An unscripted fetch fails
/// with a network error (so a test never reconciles against an accidental
/// empty snapshot); an unscripted write succeeds.
#[derive(Debug, Default)]
pub struct MockTransport {
    fetch_results: Mutex<VecDeque<SyncResult<Vec<Note>>>>,
    write_results: Mutex<VecDeque<SyncResult<()>>>,
    writes: Mutex<Vec<Vec<Note>>>,
}

impl MockTransport {
    /// Creates an empty mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the outcome of the next fetch.
    pub fn push_fetch(&self, result: SyncResult<Vec<Note>>) {
        self.fetch_results.lock().push_back(result);
    }

    /// Queues the outcome of the next write.
    pub fn push_write(&self, result: SyncResult<()>) {
        self.write_results.lock().push_back(result);
    }

    /// Returns every payload written so far, in order.
    pub fn writes(&self) -> Vec<Vec<Note>> {
        self.writes.lock().clone()
    }

    /// Returns the number of writes issued so far.
    pub fn write_count(&self) -> usize {
        self.writes.lock().len()
    }
}

impl SnapshotTransport for MockTransport {
    fn fetch_snapshot(&self) -> SyncResult<Vec<Note>> {
        self.fetch_results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(SyncError::network("no scripted fetch response")))
    }

    fn write_snapshot(&self, notes: &[Note]) -> SyncResult<()> {
        self.writes.lock().push(notes.to_vec());
        self.write_results.lock().pop_front().unwrap_or(Ok(()))
    }
}
