//! Blocking runtime binding the engine to a transport.

use crate::clock::Clock;
use crate::engine::{BoardEngine, IoRequest, RenderSink};
use crate::transport::SnapshotTransport;
use corkboard_core::BoardCommand;

/// Owns a [`BoardEngine`] and a blocking [`SnapshotTransport`], performing
/// each emitted request inline and feeding the outcome straight back.
///
/// This is the production wiring. Tests usually drive the engine directly
/// instead and withhold completions to model requests that are still in
/// flight.
pub struct SyncRuntime<T: SnapshotTransport, C: Clock, R: RenderSink> {
    engine: BoardEngine<C, R>,
    transport: T,
}

impl<T: SnapshotTransport, C: Clock, R: RenderSink> SyncRuntime<T, C, R> {
    /// Wires an engine to a transport.
    pub fn new(engine: BoardEngine<C, R>, transport: T) -> Self {
        Self { engine, transport }
    }

    /// Runs the eager initial load.
    pub fn start(&mut self) {
        let request = self.engine.start();
        self.perform(request);
    }

    /// Applies a gesture command, performing any resulting write.
    pub fn dispatch(&mut self, command: BoardCommand) {
        if let Some(request) = self.engine.handle(command) {
            self.perform(request);
        }
    }

    /// Pumps the timers: due debounced writes and due polls.
    pub fn tick(&mut self) {
        if let Some(request) = self.engine.tick() {
            self.perform(request);
        }
    }

    /// Tears the engine down.
    pub fn shutdown(&mut self) {
        self.engine.shutdown();
    }

    /// Returns the engine.
    pub fn engine(&self) -> &BoardEngine<C, R> {
        &self.engine
    }

    /// Returns the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn perform(&mut self, request: IoRequest) {
        match request {
            IoRequest::Fetch => {
                let result = self.transport.fetch_snapshot();
                self.engine.complete_fetch(result);
            }
            IoRequest::Write(notes) => {
                let result = self.transport.write_snapshot(&notes);
                self.engine.complete_write(result);
            }
        }
    }
}
