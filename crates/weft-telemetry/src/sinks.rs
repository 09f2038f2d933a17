//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use crate::events::{EventKind, SimulationEvent};

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called once when the run ends.
    fn finalize(&mut self) {}

    fn name(&self) -> &str;
}

/// Collects events in memory.
///
/// The sink shares its buffer with the [`VecSinkReader`] returned by
/// [`VecSink::reader`], so events stay readable after the sink has been
/// boxed into an [`EventBus`](crate::EventBus).
#[derive(Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<SimulationEvent>>>,
}

/// Read side of a [`VecSink`].
#[derive(Clone, Default)]
pub struct VecSinkReader {
    events: Arc<Mutex<Vec<SimulationEvent>>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A reader onto this sink's buffer.
    pub fn reader(&self) -> VecSinkReader {
        VecSinkReader {
            events: Arc::clone(&self.events),
        }
    }
}

impl VecSinkReader {
    /// Copy of every event received so far.
    pub fn events(&self) -> Vec<SimulationEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of received events whose payload has the given kind name.
    pub fn count(&self, kind_name: &str) -> usize {
        self.events
            .lock()
            .map(|e| e.iter().filter(|ev| ev.kind_name() == kind_name).count())
            .unwrap_or(0)
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Forwards events to `tracing`.
///
/// Step boundaries and normal passes go out at `debug`, everything else at
/// `info`, and failures at `warn`.
#[derive(Debug, Default)]
pub struct TracingSink {
    handled: u64,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.handled += 1;
        match &event.kind {
            EventKind::StepBegin { .. }
            | EventKind::StepEnd { .. }
            | EventKind::NormalsRecomputed { .. } => {
                tracing::debug!(step = event.step, event = ?event.kind, "simulation_event");
            }
            EventKind::StepFailed { reason } => {
                tracing::warn!(step = event.step, %reason, "simulation_event");
            }
            EventKind::Energy { .. } | EventKind::Custom { .. } => {
                tracing::info!(step = event.step, event = ?event.kind, "simulation_event");
            }
        }
    }

    fn finalize(&mut self) {
        tracing::debug!(events = self.handled, "tracing sink finalized");
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
