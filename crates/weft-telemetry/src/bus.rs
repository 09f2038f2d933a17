//! Event bus: queued dispatch from one producer to many sinks.
//!
//! Events go through a `std::sync::mpsc` channel and are delivered to every
//! registered sink when the bus is flushed. Emitting never blocks and never
//! runs sink code, so the stepping loop stays free of I/O.

use std::sync::mpsc;

use crate::events::SimulationEvent;
use crate::sinks::EventSink;

/// Broadcast event bus for simulation telemetry.
pub struct EventBus {
    sender: mpsc::Sender<SimulationEvent>,
    receiver: mpsc::Receiver<SimulationEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    /// Disabled bus drops events at `emit`.
    enabled: bool,
}

impl EventBus {
    /// Creates an enabled bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        tracing::debug!(sink = sink.name(), "telemetry sink registered");
        self.sinks.push(sink);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queue an event. No-op while the bus is disabled.
    pub fn emit(&self, event: SimulationEvent) {
        if !self.enabled {
            return;
        }
        // The receiver lives in `self`, so the send cannot fail.
        let _ = self.sender.send(event);
    }

    /// Deliver every queued event to every sink, in emission order.
    ///
    /// Returns the number of events delivered.
    pub fn flush(&mut self) -> usize {
        let mut delivered = 0;
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            delivered += 1;
        }
        delivered
    }

    /// Flush, then let every sink finish its output.
    pub fn finalize(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
