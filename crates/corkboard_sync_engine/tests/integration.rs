//! Integration tests: engine, runtime, and store wired together.

use corkboard_core::{BoardCommand, Note, NoteId};
use corkboard_sync_engine::{
    BoardEngine, HttpTransport, LoopbackClient, LoopbackStore, ManualClock, RenderSink,
    SnapshotDocument, SyncConfig, SyncRuntime, WriteResponse,
};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

const DEBOUNCE: Duration = Duration::from_millis(400);
const POLL: Duration = Duration::from_secs(5);
const GRACE: Duration = Duration::from_secs(2);

/// An in-memory snapshot store shared between clients.
#[derive(Debug, Default)]
struct SharedStore {
    document: Mutex<Vec<Note>>,
    reject_writes: Mutex<bool>,
    gets: Mutex<usize>,
    posts: Mutex<usize>,
}

impl SharedStore {
    fn notes(&self) -> Vec<Note> {
        self.document.lock().clone()
    }

    fn set_reject_writes(&self, reject: bool) {
        *self.reject_writes.lock() = reject;
    }

    fn get_count(&self) -> usize {
        *self.gets.lock()
    }
}

/// A handle connecting one client to the shared store.
struct StoreHandle(Arc<SharedStore>);

impl LoopbackStore for StoreHandle {
    fn handle_get(&self, _path: &str) -> Result<Vec<u8>, String> {
        *self.0.gets.lock() += 1;
        SnapshotDocument::new(self.0.notes())
            .encode()
            .map_err(|e| e.to_string())
    }

    fn handle_post(&self, _path: &str, body: &[u8]) -> Result<Vec<u8>, String> {
        *self.0.posts.lock() += 1;
        let response = if *self.0.reject_writes.lock() {
            WriteResponse::rejected("read_only")
        } else {
            let document = SnapshotDocument::decode(body).map_err(|e| e.to_string())?;
            *self.0.document.lock() = document.notes;
            WriteResponse::success()
        };
        response.encode().map_err(|e| e.to_string())
    }
}

/// A render layer that ignores everything.
#[derive(Debug, Default)]
struct NullSink;

impl RenderSink for NullSink {
    fn render_notes(&mut self, _notes: &[Note]) {}

    fn set_loading(&mut self, _loading: bool) {}
}

type Client = SyncRuntime<HttpTransport<LoopbackClient<StoreHandle>>, ManualClock, NullSink>;

fn make_client(store: &Arc<SharedStore>, clock: &ManualClock) -> Client {
    let config = SyncConfig::new("https://store.example.com")
        .with_debounce_delay(DEBOUNCE)
        .with_poll_interval(POLL)
        .with_min_save_interval(GRACE);
    let engine = BoardEngine::new(config, clock.clone(), NullSink);
    let transport = HttpTransport::new(
        "https://store.example.com",
        LoopbackClient::new(StoreHandle(Arc::clone(store))),
    );
    SyncRuntime::new(engine, transport)
}

#[test]
fn edit_cycle_persists_through_store() {
    let store = Arc::new(SharedStore::default());
    let clock = ManualClock::new();
    let mut client = make_client(&store, &clock);

    client.start();
    assert!(client.engine().notes().is_empty());

    // Create writes immediately.
    client.dispatch(BoardCommand::Create);
    assert_eq!(store.notes().len(), 1);
    let id = client.engine().notes()[0].id.clone();

    // Two rapid edits coalesce into one debounced write.
    client.dispatch(BoardCommand::ContentChanged {
        id: id.clone(),
        content: "h".into(),
    });
    clock.advance(Duration::from_millis(200));
    client.dispatch(BoardCommand::ContentChanged {
        id: id.clone(),
        content: "hi".into(),
    });

    let posts_before = *store.posts.lock();
    clock.advance(DEBOUNCE);
    client.tick();

    assert_eq!(*store.posts.lock(), posts_before + 1);
    assert_eq!(store.notes()[0].content, "hi");
}

#[test]
fn second_client_observes_remote_changes() {
    let store = Arc::new(SharedStore::default());
    let clock_a = ManualClock::new();
    let clock_b = ManualClock::new();
    let mut alice = make_client(&store, &clock_a);
    let mut bob = make_client(&store, &clock_b);

    alice.start();
    alice.dispatch(BoardCommand::Create);
    let id = alice.engine().notes()[0].id.clone();

    // Bob's initial load picks the note up.
    bob.start();
    assert_eq!(bob.engine().notes().len(), 1);
    assert_eq!(bob.engine().notes()[0].id, id);

    // Alice deletes; Bob's next poll drops it.
    alice.dispatch(BoardCommand::Delete { id });
    clock_b.advance(POLL);
    bob.tick();
    assert!(bob.engine().notes().is_empty());
}

#[test]
fn last_write_wins_between_clients() {
    let store = Arc::new(SharedStore::default());
    let clock_a = ManualClock::new();
    let clock_b = ManualClock::new();
    let mut alice = make_client(&store, &clock_a);
    let mut bob = make_client(&store, &clock_b);

    alice.start();
    alice.dispatch(BoardCommand::Create);
    let id = alice.engine().notes()[0].id.clone();
    bob.start();

    // Both edit the same note; each full-replace write clobbers the
    // other's. Bob writes last, so Bob's content stands.
    alice.dispatch(BoardCommand::ContentChanged {
        id: id.clone(),
        content: "from alice".into(),
    });
    clock_a.advance(DEBOUNCE);
    alice.tick();

    bob.dispatch(BoardCommand::ContentChanged {
        id: id.clone(),
        content: "from bob".into(),
    });
    clock_b.advance(DEBOUNCE);
    bob.tick();

    assert_eq!(store.notes()[0].content, "from bob");

    // Alice converges on Bob's version at her next unsuppressed poll.
    clock_a.advance(POLL);
    alice.tick();
    assert_eq!(alice.engine().notes()[0].content, "from bob");
}

#[test]
fn rejected_write_is_swallowed_and_retried_by_next_edit() {
    let store = Arc::new(SharedStore::default());
    let clock = ManualClock::new();
    let mut client = make_client(&store, &clock);

    client.start();
    store.set_reject_writes(true);

    // The create's write is rejected; the note stays local only.
    client.dispatch(BoardCommand::Create);
    assert_eq!(client.engine().notes().len(), 1);
    assert!(store.notes().is_empty());
    assert!(client.engine().sync_state().last_local_write_at.is_none());

    // The next edit is the de facto retry.
    store.set_reject_writes(false);
    let id = client.engine().notes()[0].id.clone();
    client.dispatch(BoardCommand::ContentChanged {
        id,
        content: "recovered".into(),
    });
    clock.advance(DEBOUNCE);
    client.tick();

    assert_eq!(store.notes().len(), 1);
    assert_eq!(store.notes()[0].content, "recovered");
}

#[test]
fn poll_inside_grace_window_issues_no_fetch() {
    let store = Arc::new(SharedStore::default());
    let clock = ManualClock::new();
    let mut client = make_client(&store, &clock);

    client.start();
    let gets_after_start = store.get_count();

    // A write lands one second before the poll comes due.
    clock.advance(Duration::from_secs(4));
    client.dispatch(BoardCommand::Create);

    clock.advance(Duration::from_secs(1));
    client.tick();
    assert_eq!(store.get_count(), gets_after_start);

    // Outside the grace window polling resumes.
    clock.advance(POLL);
    client.tick();
    assert_eq!(store.get_count(), gets_after_start + 1);
}

#[test]
fn startup_with_existing_remote_document() {
    let store = Arc::new(SharedStore::default());
    *store.document.lock() = vec![
        Note::new(NoteId::from_string("n1"), "left", 50.0, 50.0, 260.0, 200.0),
        Note::new(NoteId::from_string("n2"), "right", 400.0, 50.0, 260.0, 200.0),
    ];

    let clock = ManualClock::new();
    let mut client = make_client(&store, &clock);
    client.start();

    let ids: Vec<&str> = client
        .engine()
        .notes()
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(ids, vec!["n1", "n2"]);
}
