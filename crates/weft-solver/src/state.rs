//! Particle state store: per-particle position, velocity, and normal.
//!
//! This is the primary mutable data structure during simulation. The
//! integrator writes positions and velocities; the normal estimator writes
//! normals. All three arrays are indexed by the grid's row-major id.

use weft_math::Vec3;
use weft_mesh::normals;
use weft_mesh::GridSpec;
use weft_types::{WeftError, WeftResult};

/// Per-particle simulation buffers.
///
/// # Layout
///
/// All arrays have length `R²`, indexed by `i * R + j`:
/// ```text
/// positions:  [x(0,0), x(0,1), ..., x(R-1,R-1)]
/// velocities: [v(0,0), ...]
/// normals:    [n(0,0), ...]
/// ```
///
/// Normals are derived data. They only change when
/// [`ParticleState::recompute_normals`] runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleState {
    grid: GridSpec,
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    normals: Vec<Vec3>,
}

impl ParticleState {
    /// Initialize from positions. Velocities and normals start at zero.
    pub fn from_positions(grid: GridSpec, positions: Vec<Vec3>) -> WeftResult<Self> {
        let n = grid.particle_count();
        if positions.len() != n {
            return Err(WeftError::ConfigurationError(format!(
                "position count ({}) != particle count ({})",
                positions.len(),
                n
            )));
        }
        Ok(Self {
            grid,
            positions,
            velocities: vec![Vec3::ZERO; n],
            normals: vec![Vec3::ZERO; n],
        })
    }

    #[inline]
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    // ─── Row/column accessors ───

    pub fn position(&self, i: usize, j: usize) -> WeftResult<Vec3> {
        Ok(self.positions[self.grid.checked_index(i, j)?])
    }

    pub fn velocity(&self, i: usize, j: usize) -> WeftResult<Vec3> {
        Ok(self.velocities[self.grid.checked_index(i, j)?])
    }

    pub fn normal(&self, i: usize, j: usize) -> WeftResult<Vec3> {
        Ok(self.normals[self.grid.checked_index(i, j)?])
    }

    pub fn set_position(&mut self, i: usize, j: usize, x: Vec3) -> WeftResult<()> {
        let id = self.grid.checked_index(i, j)?;
        self.positions[id] = x;
        Ok(())
    }

    pub fn set_velocity(&mut self, i: usize, j: usize, v: Vec3) -> WeftResult<()> {
        let id = self.grid.checked_index(i, j)?;
        self.velocities[id] = v;
        Ok(())
    }

    // ─── Linear-index accessors (hot path, caller guarantees bounds) ───

    #[inline]
    pub fn position_at(&self, id: usize) -> Vec3 {
        self.positions[id]
    }

    #[inline]
    pub fn velocity_at(&self, id: usize) -> Vec3 {
        self.velocities[id]
    }

    #[inline]
    pub fn normal_at(&self, id: usize) -> Vec3 {
        self.normals[id]
    }

    #[inline]
    pub fn set_position_at(&mut self, id: usize, x: Vec3) {
        self.positions[id] = x;
    }

    #[inline]
    pub fn set_velocity_at(&mut self, id: usize, v: Vec3) {
        self.velocities[id] = v;
    }

    // ─── Whole-buffer views ───

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Recompute every normal from the current positions.
    pub fn recompute_normals(&mut self) -> WeftResult<()> {
        normals::recompute_normals(&self.grid, &self.positions, &mut self.normals)
    }

    /// Compute total kinetic energy: 0.5 · m · Σ ||v_i||² over every particle.
    pub fn kinetic_energy(&self, mass: f32) -> f64 {
        let sum: f64 = self
            .velocities
            .iter()
            .map(|v| v.length_squared() as f64)
            .sum();
        0.5 * mass as f64 * sum
    }

    /// Largest particle speed.
    pub fn max_speed(&self) -> f32 {
        self.velocities.iter().map(|v| v.length()).fold(0.0, f32::max)
    }
}
