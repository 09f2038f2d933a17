//! The cloth simulation object.
//!
//! [`ClothSimulation`] owns everything one simulation needs: grid, rest
//! lengths, physical constants, particle state, render topology, and the
//! integration scheme. Independent simulations share nothing.
//!
//! A typical driver:
//!
//! ```text
//! let mut sim = ClothSimulation::new(20, PhysicsConfig::default())?;
//! loop {
//!     sim.step(dt)?;
//!     sim.recompute_normals()?;   // once per frame, for drag and shading
//! }
//! ```

use weft_math::Vec3;
use weft_mesh::generators::flat_sheet;
use weft_mesh::{ClothTopology, GridSpec, RestLengths};
use weft_types::{GridCoord, WeftResult};

use crate::config::PhysicsConfig;
use crate::forces::ForceModel;
use crate::state::ParticleState;
use crate::strategy::{IntegrationMode, IntegrationScheme, StepResult};

/// A square mass-spring cloth.
pub struct ClothSimulation {
    grid: GridSpec,
    config: PhysicsConfig,
    forces: ForceModel,
    state: ParticleState,
    topology: ClothTopology,
    mode: IntegrationMode,
    scheme: Box<dyn IntegrationScheme>,
    steps_taken: u64,
    sim_time: f64,
}

impl ClothSimulation {
    /// Validates `config` and builds a flat sheet of `resolution²` particles
    /// using the default [`IntegrationMode`].
    pub fn new(resolution: usize, config: PhysicsConfig) -> WeftResult<Self> {
        Self::with_integration(resolution, config, IntegrationMode::default())
    }

    /// Like [`ClothSimulation::new`] with an explicit integration scheme.
    pub fn with_integration(
        resolution: usize,
        config: PhysicsConfig,
        mode: IntegrationMode,
    ) -> WeftResult<Self> {
        config.validate()?;
        let (grid, state, topology) = build(resolution)?;
        let forces = ForceModel::new(&config, RestLengths::for_grid(&grid));

        tracing::debug!(
            resolution,
            particles = grid.particle_count(),
            triangles = topology.triangle_count(),
            scheme = mode.name(),
            "cloth simulation created"
        );

        Ok(Self {
            grid,
            config,
            forces,
            state,
            topology,
            mode,
            scheme: mode.scheme(),
            steps_taken: 0,
            sim_time: 0.0,
        })
    }

    /// Rebuild the grid at `resolution`, discarding all prior state.
    ///
    /// Positions return to the flat sheet, velocities to zero, normals are
    /// recomputed, and render buffers are rebuilt. On error nothing changes.
    pub fn initialize(&mut self, resolution: usize) -> WeftResult<()> {
        let (grid, state, topology) = build(resolution)?;
        self.forces = ForceModel::new(&self.config, RestLengths::for_grid(&grid));
        self.grid = grid;
        self.state = state;
        self.topology = topology;
        self.scheme = self.mode.scheme();
        self.steps_taken = 0;
        self.sim_time = 0.0;
        tracing::debug!(resolution, "cloth simulation re-initialized");
        Ok(())
    }

    /// Recompute every particle normal from current positions.
    pub fn recompute_normals(&mut self) -> WeftResult<()> {
        self.state.recompute_normals().inspect_err(|e| {
            tracing::warn!(error = %e, step = self.steps_taken, "normal recomputation failed");
        })
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Normals are not refreshed; drag uses the normals from the last
    /// [`ClothSimulation::recompute_normals`] call.
    pub fn step(&mut self, dt: f32) -> WeftResult<StepResult> {
        let result = self
            .scheme
            .step(&mut self.state, &self.forces, dt)
            .inspect_err(|e| {
                tracing::warn!(error = %e, step = self.steps_taken, "step failed");
            })?;
        self.steps_taken += 1;
        self.sim_time += dt as f64;
        tracing::trace!(
            step = self.steps_taken,
            max_speed = result.max_speed,
            "step complete"
        );
        Ok(result)
    }

    /// Net force currently acting on particle `(i, j)`.
    pub fn net_force(&self, i: usize, j: usize) -> WeftResult<Vec3> {
        self.grid.checked_index(i, j)?;
        self.forces.net_force(&self.state, GridCoord::new(i, j))
    }

    // ─── Particle accessors ───

    pub fn get_position(&self, i: usize, j: usize) -> WeftResult<Vec3> {
        self.state.position(i, j)
    }

    pub fn get_velocity(&self, i: usize, j: usize) -> WeftResult<Vec3> {
        self.state.velocity(i, j)
    }

    pub fn get_normal(&self, i: usize, j: usize) -> WeftResult<Vec3> {
        self.state.normal(i, j)
    }

    pub fn set_position(&mut self, i: usize, j: usize, x: Vec3) -> WeftResult<()> {
        self.state.set_position(i, j, x)
    }

    pub fn set_velocity(&mut self, i: usize, j: usize, v: Vec3) -> WeftResult<()> {
        self.state.set_velocity(i, j, v)
    }

    // ─── Topology and configuration ───

    /// Triangle index buffer for rendering.
    pub fn triangle_indices(&self) -> &[u32] {
        &self.topology.triangles
    }

    /// Wireframe edge index buffer for rendering.
    pub fn wire_indices(&self) -> &[u32] {
        &self.topology.wire
    }

    pub fn topology(&self) -> &ClothTopology {
        &self.topology
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn resolution(&self) -> usize {
        self.grid.resolution()
    }

    pub fn rest_lengths(&self) -> &RestLengths {
        self.forces.rest_lengths()
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn integration(&self) -> IntegrationMode {
        self.mode
    }

    pub fn state(&self) -> &ParticleState {
        &self.state
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Accumulated simulated time (seconds).
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Total kinetic energy of the sheet.
    pub fn kinetic_energy(&self) -> f64 {
        self.state.kinetic_energy(self.config.mass)
    }
}

/// Grid, flat-sheet state with normals, and render topology for `resolution`.
fn build(resolution: usize) -> WeftResult<(GridSpec, ParticleState, ClothTopology)> {
    let grid = GridSpec::new(resolution)?;
    let mut state = ParticleState::from_positions(grid, flat_sheet(&grid))?;
    state.recompute_normals()?;
    let topology = ClothTopology::build(&grid);
    Ok((grid, state, topology))
}
