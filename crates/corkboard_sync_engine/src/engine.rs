//! Board engine: the single coordinator for board and sync state.

use crate::clock::Clock;
use crate::config::SyncConfig;
use crate::debounce::DebouncedWriter;
use crate::error::SyncResult;
use crate::poll::{PollDecision, PollScheduler};
use crate::reconcile::{reconcile, ReconcileOutcome};
use crate::state::{Interaction, SyncState};
use corkboard_core::{BoardCommand, BoardState, Note, NoteId};
use tracing::{debug, info, warn};

/// A network operation the engine needs performed.
///
/// The engine never touches a transport itself. The caller performs the
/// request and delivers the outcome through
/// [`BoardEngine::complete_fetch`] or [`BoardEngine::complete_write`],
/// which keeps every suspension point explicit and the engine fully
/// deterministic under test.
#[derive(Debug, Clone, PartialEq)]
pub enum IoRequest {
    /// Fetch the full remote snapshot.
    Fetch,
    /// Write the full board snapshot.
    Write(Vec<Note>),
}

/// Sink for render-layer updates.
///
/// `render_notes` fires on every structural change and every applied
/// reconciliation — not on pure position/size/content mutations during
/// interaction, which the render layer already displays and only reports
/// here for persistence. The sink must preserve a focused input's
/// displayed value across a redraw; the engine protects dragged geometry
/// on its side.
pub trait RenderSink {
    /// Redraws the full note set.
    fn render_notes(&mut self, notes: &[Note]);

    /// Shows or hides the initial-load indicator.
    fn set_loading(&mut self, loading: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InitialLoad {
    NotStarted,
    InFlight,
    Done,
}

/// The coordinator owning board state, sync state, and the write/poll
/// schedules.
///
/// Constructed at application start and torn down with
/// [`shutdown`](BoardEngine::shutdown); there are no ambient globals. All
/// methods run on the single control thread.
pub struct BoardEngine<C: Clock, R: RenderSink> {
    config: SyncConfig,
    clock: C,
    render: R,
    board: BoardState,
    sync: SyncState,
    debounce: DebouncedWriter,
    poll: PollScheduler,
    selected: Option<NoteId>,
    initial_load: InitialLoad,
}

impl<C: Clock, R: RenderSink> BoardEngine<C, R> {
    /// Creates an engine with an empty board.
    pub fn new(config: SyncConfig, clock: C, render: R) -> Self {
        let debounce = DebouncedWriter::new(config.debounce_delay);
        let poll = PollScheduler::new(config.poll_interval);
        Self {
            config,
            clock,
            render,
            board: BoardState::new(),
            sync: SyncState::new(),
            debounce,
            poll,
            selected: None,
            initial_load: InitialLoad::NotStarted,
        }
    }

    /// Returns the current note set.
    pub fn notes(&self) -> &[Note] {
        self.board.notes()
    }

    /// Returns the current board state.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Returns the current sync flags.
    pub fn sync_state(&self) -> &SyncState {
        &self.sync
    }

    /// Returns the currently selected note, if any.
    pub fn selected(&self) -> Option<&NoteId> {
        self.selected.as_ref()
    }

    /// Returns true while the initial load has not settled.
    pub fn is_loading(&self) -> bool {
        self.initial_load == InitialLoad::InFlight
    }

    /// Begins the eager initial load.
    ///
    /// The first read is unconditional: none of the poll suppression
    /// guards apply, and the loading indicator is raised until it
    /// settles.
    pub fn start(&mut self) -> IoRequest {
        let now = self.clock.now();
        self.render.set_loading(true);
        self.initial_load = InitialLoad::InFlight;
        self.sync.fetch_in_flight = true;
        self.poll.schedule_next(now);
        debug!("initial snapshot load started");
        IoRequest::Fetch
    }

    /// Applies a gesture command from the interaction boundary.
    ///
    /// Structural commands (create, delete) redraw and write immediately;
    /// field mutations only (re)arm the debounced write.
    pub fn handle(&mut self, command: BoardCommand) -> Option<IoRequest> {
        match command {
            BoardCommand::Create => {
                let note = Note::with_defaults();
                let id = note.id.clone();
                if let Err(err) = self.board.add(note) {
                    warn!(%err, "create ignored");
                    return None;
                }
                debug!(%id, "note created");
                self.selected = Some(id);
                self.render.render_notes(self.board.notes());
                self.structural_write()
            }
            BoardCommand::Delete { id } => {
                if !self.board.remove(&id) {
                    debug!(%id, "delete for unknown note ignored");
                    return None;
                }
                if self.selected.as_ref() == Some(&id) {
                    self.selected = None;
                }
                debug!(%id, "note deleted");
                self.render.render_notes(self.board.notes());
                self.structural_write()
            }
            BoardCommand::ContentChanged { id, content } => {
                self.mutate(&id, |note| note.content = content)
            }
            BoardCommand::Moved { id, x, y } => self.mutate(&id, |note| {
                note.x = x;
                note.y = y;
            }),
            BoardCommand::Resized { id, width, height } => self.mutate(&id, |note| {
                note.width = width;
                note.height = height;
            }),
            BoardCommand::Selected { id } => {
                self.selected = Some(id);
                None
            }
            BoardCommand::DragStarted { id, kind } => {
                self.sync.interaction = Some(Interaction { note_id: id, kind });
                None
            }
            BoardCommand::DragEnded => {
                self.sync.interaction = None;
                None
            }
        }
    }

    /// Pumps the timers: fires a due debounced write, then a due,
    /// unsuppressed poll.
    ///
    /// Call this regularly from the host's event loop; with a manual clock
    /// it is the only thing a test has to drive.
    pub fn tick(&mut self) -> Option<IoRequest> {
        let now = self.clock.now();

        if self.debounce.take_due(now) {
            if self.sync.write_in_flight {
                // At most one write in flight: the pending write is
                // dropped, not queued. Further edits re-arm the debounce.
                debug!("debounced write due during in-flight write; dropped");
                return None;
            }
            return self.begin_write();
        }

        match self
            .poll
            .decide(now, &self.sync, self.config.min_save_interval)
        {
            PollDecision::Fetch => {
                self.sync.fetch_in_flight = true;
                debug!("poll fetch issued");
                Some(IoRequest::Fetch)
            }
            PollDecision::Skipped(reason) => {
                debug!(?reason, "poll tick skipped");
                None
            }
            PollDecision::NotDue => None,
        }
    }

    /// Delivers the outcome of a fetch issued by [`start`](Self::start) or
    /// [`tick`](Self::tick).
    pub fn complete_fetch(&mut self, result: SyncResult<Vec<Note>>) {
        self.sync.fetch_in_flight = false;
        if self.initial_load == InitialLoad::InFlight {
            self.initial_load = InitialLoad::Done;
            self.render.set_loading(false);
        }

        match result {
            Ok(snapshot) => {
                match reconcile(&mut self.board, snapshot, self.sync.interaction.as_ref()) {
                    ReconcileOutcome::Applied => {
                        info!(notes = self.board.len(), "remote snapshot applied");
                        self.render.render_notes(self.board.notes());
                    }
                    ReconcileOutcome::Unchanged => {}
                }
            }
            Err(err) => {
                // Stale-but-valid local view is retained; the next poll
                // tick is the only retry.
                warn!(%err, "snapshot fetch failed, keeping local state");
            }
        }
    }

    /// Delivers the outcome of a write issued by [`handle`](Self::handle)
    /// or [`tick`](Self::tick).
    pub fn complete_write(&mut self, result: SyncResult<()>) {
        self.sync.write_in_flight = false;
        match result {
            Ok(()) => {
                self.sync.last_local_write_at = Some(self.clock.now());
                debug!("snapshot write acknowledged");
            }
            Err(err) => {
                // No automatic retry: the next debounced or structural
                // write is the de facto retry path.
                warn!(%err, "snapshot write failed");
            }
        }
    }

    /// Tears the engine down: cancels the poll schedule and abandons any
    /// pending debounced write.
    pub fn shutdown(&mut self) {
        if self.debounce.cancel() {
            debug!("pending debounced write abandoned at shutdown");
        }
        self.poll.stop();
    }

    fn mutate<F>(&mut self, id: &NoteId, mutator: F) -> Option<IoRequest>
    where
        F: FnOnce(&mut Note),
    {
        if self.board.upsert(id, mutator) {
            self.debounce.schedule(self.clock.now());
        } else {
            debug!(%id, "mutation for unknown note ignored");
        }
        None
    }

    /// Creates and deletes bypass the debounce entirely: losing one to a
    /// stale overwrite is a correctness issue, losing an intermediate
    /// keystroke is not.
    fn structural_write(&mut self) -> Option<IoRequest> {
        self.debounce.cancel();
        if self.sync.write_in_flight {
            warn!("write already in flight; structural write dropped");
            return None;
        }
        self.begin_write()
    }

    fn begin_write(&mut self) -> Option<IoRequest> {
        self.sync.write_in_flight = true;
        Some(IoRequest::Write(self.board.notes().to_vec()))
    }
}
