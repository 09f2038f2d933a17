//! Per-particle force assembly.
//!
//! The net force on a particle is the sum of four terms:
//!
//! 1. Springs: Hookean, over the particle's in-bounds stencil partners
//! 2. Gravity: `(0, −m·g, 0)`
//! 3. Linear damping: `−Cd · v`
//! 4. Viscous drag: `Cv · (n · (uf − v)) · n`, along the stored normal
//!
//! Every term is a pure function of the current state and the constants.
//! Drag uses whatever normal was stored last; nothing here recomputes it.

use weft_math::{checked_direction, Vec3};
use weft_mesh::{RestLengths, SpringClass};
use weft_types::{GridCoord, WeftResult};

use crate::config::PhysicsConfig;
use crate::state::ParticleState;

/// Hookean force on `p1` from a spring to `p2`.
///
/// `K · (L0 − |d|) · d/|d|` with `d = p1 − p2`: pulls `p1` toward `p2` when
/// stretched past `rest_length`, pushes it away when compressed. Fails with
/// `NumericalDegeneracy` if the two endpoints coincide.
pub fn hooke(p1: Vec3, p2: Vec3, stiffness: f32, rest_length: f32) -> WeftResult<Vec3> {
    let (len, dir) = checked_direction(p1 - p2, || {
        format!("spring between {p1} and {p2}")
    })?;
    Ok(dir * (stiffness * (rest_length - len)))
}

/// Force evaluator bound to one configuration and one grid resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceModel {
    mass: f32,
    stiffness: [f32; 3],
    rest: RestLengths,
    damping: f32,
    drag: f32,
    fluid_velocity: Vec3,
    gravity: Vec3,
}

impl ForceModel {
    pub fn new(config: &PhysicsConfig, rest: RestLengths) -> Self {
        Self {
            mass: config.mass,
            stiffness: config.stiffness,
            rest,
            damping: config.damping,
            drag: config.drag,
            fluid_velocity: Vec3::from_array(config.fluid_velocity),
            gravity: Vec3::new(0.0, -config.mass * config.gravity, 0.0),
        }
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn rest_lengths(&self) -> &RestLengths {
        &self.rest
    }

    /// Force on `p` from the spring of class `class` joining it to `q`.
    pub fn spring_force(
        &self,
        state: &ParticleState,
        p: GridCoord,
        q: GridCoord,
        class: SpringClass,
    ) -> WeftResult<Vec3> {
        let grid = state.grid();
        let x1 = state.position_at(grid.index(p.i, p.j));
        let x2 = state.position_at(grid.index(q.i, q.j));
        hooke(x1, x2, self.stiffness[class.index()], self.rest[class]).inspect_err(|_| {
            tracing::debug!(?p, ?q, class = class.name(), "degenerate spring");
        })
    }

    /// Sum of all spring forces acting on `p`.
    pub fn spring_forces(&self, state: &ParticleState, p: GridCoord) -> WeftResult<Vec3> {
        let mut total = Vec3::ZERO;
        for partner in state.grid().spring_partners(p) {
            total += self.spring_force(state, p, partner.coord, partner.class)?;
        }
        Ok(total)
    }

    /// Gravity on one particle.
    #[inline]
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Linear damping on the particle at linear index `id`.
    #[inline]
    pub fn damping(&self, state: &ParticleState, id: usize) -> Vec3 {
        state.velocity_at(id) * -self.damping
    }

    /// Viscous drag from the ambient fluid, projected on the stored normal.
    #[inline]
    pub fn viscous(&self, state: &ParticleState, id: usize) -> Vec3 {
        let n = state.normal_at(id);
        let relative = self.fluid_velocity - state.velocity_at(id);
        n * (n.dot(relative) * self.drag)
    }

    /// Net force on `p`: springs + gravity + damping + drag.
    pub fn net_force(&self, state: &ParticleState, p: GridCoord) -> WeftResult<Vec3> {
        let id = state.grid().index(p.i, p.j);
        let mut total = self.spring_forces(state, p)?;
        total += self.gravity();
        total += self.damping(state, id);
        total += self.viscous(state, id);
        Ok(total)
    }
}
