//! Simulation event types.
//!
//! Structured events emitted while driving a cloth simulation. Events are
//! plain values carrying just enough data to monitor a run.

use serde::{Deserialize, Serialize};

/// A simulation event, tagged with the step it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Step number (0-indexed).
    pub step: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Step started.
    StepBegin {
        /// Simulated time at the start of the step (seconds).
        sim_time: f64,
    },

    /// Step completed.
    StepEnd {
        /// Wall-clock time for the step (seconds).
        wall_time: f64,
        /// Particles advanced (every unpinned particle).
        particles_updated: u32,
        /// Largest particle speed after the step.
        max_speed: f32,
    },

    /// Step aborted by an error. State may be partially updated.
    StepFailed {
        /// Rendered error message.
        reason: String,
    },

    /// Particle normals were recomputed.
    NormalsRecomputed {
        /// Wall-clock time for the pass (seconds).
        wall_time: f64,
    },

    /// Energy snapshot at the current state.
    Energy {
        /// Kinetic energy, 0.5 · m · Σ|v|².
        kinetic: f64,
        /// Gravitational potential energy, m · g · Σy.
        potential: f64,
        /// Spring energy, Σ 0.5 · K · (len − L0)².
        elastic: f64,
    },

    /// Free-form event.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    pub fn new(step: u64, kind: EventKind) -> Self {
        Self { step, kind }
    }

    /// Short stable name of the payload variant.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            EventKind::StepBegin { .. } => "step_begin",
            EventKind::StepEnd { .. } => "step_end",
            EventKind::StepFailed { .. } => "step_failed",
            EventKind::NormalsRecomputed { .. } => "normals_recomputed",
            EventKind::Energy { .. } => "energy",
            EventKind::Custom { .. } => "custom",
        }
    }
}

impl EventKind {
    /// Total mechanical energy, if this is an energy event.
    pub fn total_energy(&self) -> Option<f64> {
        match self {
            EventKind::Energy { kinetic, potential, elastic } => Some(kinetic + potential + elastic),
            _ => None,
        }
    }
}
