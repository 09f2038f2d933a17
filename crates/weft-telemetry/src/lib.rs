//! # weft-telemetry
//!
//! Event bus for simulation telemetry. Drivers emit structured events
//! (step timing, energy, failures) that pluggable sinks consume.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink, VecSinkReader};
