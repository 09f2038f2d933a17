//! Integration tests for weft-telemetry.

use weft_telemetry::bus::EventBus;
use weft_telemetry::events::{EventKind, SimulationEvent};
use weft_telemetry::sinks::{EventSink, TracingSink, VecSink};

fn begin(step: u64) -> SimulationEvent {
    SimulationEvent::new(step, EventKind::StepBegin { sim_time: step as f64 * 0.01 })
}

// ─── Bus Tests ────────────────────────────────────────────────

#[test]
fn emit_and_flush() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let events = sink.reader();
    bus.add_sink(Box::new(sink));

    bus.emit(begin(0));
    bus.emit(SimulationEvent::new(
        0,
        EventKind::StepEnd { wall_time: 0.001, particles_updated: 398, max_speed: 0.1 },
    ));
    assert!(events.is_empty(), "nothing is delivered before flush");

    assert_eq!(bus.flush(), 2);
    let received = events.events();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0], begin(0));
    assert_eq!(received[1].kind_name(), "step_end");
}

#[test]
fn flush_preserves_order() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let events = sink.reader();
    bus.add_sink(Box::new(sink));
    for step in 0..10 {
        bus.emit(begin(step));
    }
    bus.flush();
    let steps: Vec<u64> = events.events().iter().map(|e| e.step).collect();
    assert_eq!(steps, (0..10).collect::<Vec<_>>());
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let events = sink.reader();
    bus.add_sink(Box::new(sink));
    bus.set_enabled(false);
    assert!(!bus.is_enabled());
    bus.emit(begin(0));
    assert_eq!(bus.flush(), 0);
    assert!(events.is_empty());
}

#[test]
fn every_sink_sees_every_event() {
    let mut bus = EventBus::new();
    let a = VecSink::new();
    let b = VecSink::new();
    let (ha, hb) = (a.reader(), b.reader());
    bus.add_sink(Box::new(a));
    bus.add_sink(Box::new(b));
    assert_eq!(bus.sink_count(), 2);

    bus.emit(begin(3));
    bus.emit(begin(4));
    bus.finalize();
    assert_eq!(ha.len(), 2);
    assert_eq!(hb.events(), ha.events());
}

#[test]
fn flush_without_sinks_drains_queue() {
    let mut bus = EventBus::default();
    bus.emit(begin(0));
    assert_eq!(bus.flush(), 1);
    assert_eq!(bus.flush(), 0);
}

// ─── Sink Tests ───────────────────────────────────────────────

#[test]
fn vec_sink_counts_by_kind() {
    let mut sink = VecSink::new();
    let reader = sink.reader();
    sink.handle(&begin(0));
    sink.handle(&SimulationEvent::new(0, EventKind::NormalsRecomputed { wall_time: 1e-4 }));
    sink.handle(&begin(1));
    assert_eq!(reader.count("step_begin"), 2);
    assert_eq!(reader.count("normals_recomputed"), 1);
    assert_eq!(reader.count("energy"), 0);
    assert_eq!(sink.name(), "vec_sink");
}

#[test]
fn tracing_sink_accepts_every_kind() {
    let mut sink = TracingSink::new();
    let kinds = [
        EventKind::StepBegin { sim_time: 0.0 },
        EventKind::StepEnd { wall_time: 0.0, particles_updated: 7, max_speed: 0.0 },
        EventKind::StepFailed { reason: "degenerate spring".into() },
        EventKind::NormalsRecomputed { wall_time: 0.0 },
        EventKind::Energy { kinetic: 1.0, potential: 2.0, elastic: 0.0 },
        EventKind::Custom { label: "note".into(), payload: "{}".into() },
    ];
    for kind in kinds {
        sink.handle(&SimulationEvent::new(1, kind));
    }
    sink.finalize();
    assert_eq!(sink.name(), "tracing_sink");
}

// ─── Event Tests ──────────────────────────────────────────────

#[test]
fn event_serialization() {
    let event = SimulationEvent::new(
        5,
        EventKind::Energy { kinetic: 1.0, potential: -2.0, elastic: 0.5 },
    );
    let json = serde_json::to_string(&event).unwrap();
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
    assert_eq!(recovered.kind.total_energy(), Some(-0.5));
}

#[test]
fn failure_event_carries_reason() {
    let event = SimulationEvent::new(
        12,
        EventKind::StepFailed { reason: "zero-length spring at (2, 2)".into() },
    );
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("StepFailed"));
    assert!(json.contains("(2, 2)"));
    assert_eq!(event.kind.total_energy(), None);
}
