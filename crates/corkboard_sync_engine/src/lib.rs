//! # Corkboard Sync Engine
//!
//! State synchronization engine for Corkboard.
//!
//! This crate provides:
//! - The board engine coordinator (typed command dispatch, split-phase
//!   I/O)
//! - A trailing-edge debounced writer with structural bypass
//! - Guarded poll scheduling with a post-write grace window
//! - Snapshot reconciliation with gesture protection
//! - Snapshot transport abstraction (HTTP, mock, loopback)
//! - Clock and deadline primitives for deterministic scheduling
//!
//! ## Architecture
//!
//! The engine implements a **full-replace** synchronization model:
//! 1. Local mutations land in board state immediately
//! 2. A debounced write (immediate for create/delete) replaces the whole
//!    remote note set
//! 3. Periodic polls fetch the remote set and conditionally reconcile it
//!    into the board
//!
//! ## Key invariants
//!
//! - At most one snapshot write is in flight; a debounce expiring during
//!   an in-flight write is dropped, not queued
//! - Polls are suppressed while writing, fetching, interacting, or inside
//!   the grace window after a successful write
//! - An identical remote snapshot is discarded without a redraw
//! - A note under an active gesture never has its live geometry clobbered
//!   by an applied snapshot

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod clock;
mod config;
mod debounce;
mod engine;
mod error;
mod http;
mod poll;
mod protocol;
mod reconcile;
mod runtime;
mod state;
mod transport;

pub use clock::{Clock, Deadline, ManualClock, SystemClock};
pub use config::SyncConfig;
pub use debounce::DebouncedWriter;
pub use engine::{BoardEngine, IoRequest, RenderSink};
pub use error::{SyncError, SyncResult};
pub use http::{HttpClient, HttpTransport, LoopbackClient, LoopbackStore};
pub use poll::{PollDecision, PollScheduler, SkipReason};
pub use protocol::{SnapshotDocument, WriteResponse, STATUS_SUCCESS};
pub use reconcile::{reconcile, ReconcileOutcome};
pub use runtime::SyncRuntime;
pub use state::{Interaction, SyncState};
pub use transport::{MockTransport, SnapshotTransport};
