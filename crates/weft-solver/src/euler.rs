//! Explicit Euler integrators.
//!
//! Both schemes apply the same per-particle update:
//!
//! ```text
//! v ← v + dt · F / m
//! x ← x + dt · v      (with the already-updated v)
//! ```
//!
//! They differ in what `F` sees. [`SequentialEuler`] writes each particle
//! back before evaluating the next, so later particles in row-major order
//! feel their neighbours' new positions within the same step.
//! [`SnapshotEuler`] evaluates every force against the start-of-step state
//! first. The two produce different trajectories once springs are loaded.

use std::time::Instant;

use weft_math::Vec3;
use weft_types::WeftResult;

use crate::forces::ForceModel;
use crate::state::ParticleState;
use crate::strategy::{check_dt, IntegrationScheme, StepResult};

#[inline]
fn advance(v: Vec3, x: Vec3, force: Vec3, mass: f32, dt: f32) -> (Vec3, Vec3) {
    let v = v + force * (1.0 / mass) * dt;
    let x = x + v * dt;
    (v, x)
}

/// In-place, row-major explicit Euler (Gauss-Seidel coupling).
///
/// If a force evaluation fails partway through, particles visited earlier
/// in the step keep their new state.
#[derive(Debug, Default)]
pub struct SequentialEuler;

impl SequentialEuler {
    pub fn new() -> Self {
        Self
    }
}

impl IntegrationScheme for SequentialEuler {
    fn step(
        &mut self,
        state: &mut ParticleState,
        forces: &ForceModel,
        dt: f32,
    ) -> WeftResult<StepResult> {
        let start = Instant::now();
        check_dt(dt)?;

        let grid = *state.grid();
        let mass = forces.mass();
        let mut updated = 0;

        for (id, coord) in grid.coords().enumerate() {
            if grid.is_pinned(coord) {
                continue;
            }
            let force = forces.net_force(state, coord)?;
            let (v, x) = advance(state.velocity_at(id), state.position_at(id), force, mass, dt);
            state.set_velocity_at(id, v);
            state.set_position_at(id, x);
            updated += 1;
        }

        Ok(StepResult {
            particles_updated: updated,
            max_speed: state.max_speed(),
            wall_time: start.elapsed().as_secs_f64(),
        })
    }

    fn name(&self) -> &str {
        "sequential_euler"
    }
}

/// Two-phase explicit Euler (Jacobi coupling).
///
/// All forces are computed before any particle moves, so a failed force
/// evaluation leaves the state untouched.
#[derive(Debug, Default)]
pub struct SnapshotEuler {
    /// Scratch force buffer, reused across steps.
    forces: Vec<Vec3>,
}

impl SnapshotEuler {
    pub fn new() -> Self {
        Self { forces: Vec::new() }
    }
}

impl IntegrationScheme for SnapshotEuler {
    fn step(
        &mut self,
        state: &mut ParticleState,
        forces: &ForceModel,
        dt: f32,
    ) -> WeftResult<StepResult> {
        let start = Instant::now();
        check_dt(dt)?;

        let grid = *state.grid();
        let mass = forces.mass();

        // 1. Evaluate every force against the start-of-step state
        self.forces.clear();
        self.forces.resize(grid.particle_count(), Vec3::ZERO);
        for (id, coord) in grid.coords().enumerate() {
            if !grid.is_pinned(coord) {
                self.forces[id] = forces.net_force(state, coord)?;
            }
        }

        // 2. Apply
        let mut updated = 0;
        for (id, coord) in grid.coords().enumerate() {
            if grid.is_pinned(coord) {
                continue;
            }
            let (v, x) = advance(
                state.velocity_at(id),
                state.position_at(id),
                self.forces[id],
                mass,
                dt,
            );
            state.set_velocity_at(id, v);
            state.set_position_at(id, x);
            updated += 1;
        }

        Ok(StepResult {
            particles_updated: updated,
            max_speed: state.max_speed(),
            wall_time: start.elapsed().as_secs_f64(),
        })
    }

    fn name(&self) -> &str {
        "snapshot_euler"
    }
}
