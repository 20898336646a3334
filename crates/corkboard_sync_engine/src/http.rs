//! HTTP transport for the snapshot store.
//!
//! The actual HTTP client is abstracted via a trait so different
//! implementations (reqwest, ureq, a browser bridge) can be plugged in
//! without touching the engine.

use crate::error::{SyncError, SyncResult};
use crate::protocol::{SnapshotDocument, WriteResponse};
use crate::transport::SnapshotTransport;
use corkboard_core::Note;

/// Blocking HTTP client abstraction.
///
/// Implement this trait to provide the actual transport. Errors are plain
/// strings; the [`HttpTransport`] maps them into the sync error taxonomy.
pub trait HttpClient {
    /// Sends a GET request and returns the response body.
    fn get(&self, url: &str) -> Result<Vec<u8>, String>;

    /// Sends a POST request with a JSON body and returns the response
    /// body.
    fn post(&self, url: &str, body: Vec<u8>) -> Result<Vec<u8>, String>;
}

/// HTTP-based snapshot transport speaking the JSON document protocol.
pub struct HttpTransport<C: HttpClient> {
    /// Base URL of the store (e.g., "https://store.example.com").
    base_url: String,
    /// HTTP client implementation.
    client: C,
}

impl<C: HttpClient> HttpTransport<C> {
    /// Creates a new HTTP transport.
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }
}

impl<C: HttpClient> SnapshotTransport for HttpTransport<C> {
    fn fetch_snapshot(&self) -> SyncResult<Vec<Note>> {
        let body = self
            .client
            .get(&self.notes_url())
            .map_err(SyncError::network)?;
        Ok(SnapshotDocument::decode(&body)?.notes)
    }

    fn write_snapshot(&self, notes: &[Note]) -> SyncResult<()> {
        let body = SnapshotDocument::new(notes.to_vec()).encode()?;
        let response = self
            .client
            .post(&self.notes_url(), body)
            .map_err(SyncError::network)?;
        let ack = WriteResponse::decode(&response)?;
        if ack.is_success() {
            Ok(())
        } else {
            Err(SyncError::RemoteRejection { status: ack.status })
        }
    }
}

/// A store that can handle loopback requests in-process.
pub trait LoopbackStore {
    /// Handles a GET of the snapshot document.
    fn handle_get(&self, path: &str) -> Result<Vec<u8>, String>;

    /// Handles a POST of the snapshot document.
    fn handle_post(&self, path: &str, body: &[u8]) -> Result<Vec<u8>, String>;
}

/// An HTTP client that routes requests straight to a [`LoopbackStore`].
///
/// Wire-level tests run through the full JSON protocol without sockets.
pub struct LoopbackClient<S: LoopbackStore> {
    store: S,
}

impl<S: LoopbackStore> LoopbackClient<S> {
    /// Creates a loopback client over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn path_of(url: &str) -> &str {
        url.find("/notes").map(|i| &url[i..]).unwrap_or(url)
    }
}

impl<S: LoopbackStore> HttpClient for LoopbackClient<S> {
    fn get(&self, url: &str) -> Result<Vec<u8>, String> {
        self.store.handle_get(Self::path_of(url))
    }

    fn post(&self, url: &str, body: Vec<u8>) -> Result<Vec<u8>, String> {
        self.store.handle_post(Self::path_of(url), &body)
    }
}
