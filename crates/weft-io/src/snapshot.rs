//! State snapshots for replay and inspection.
//!
//! A snapshot captures positions and velocities at a point in time. Normals
//! are derived data and are recomputed on restore.

use std::path::Path;

use serde::{Deserialize, Serialize};
use weft_math::vector::{deinterleave, interleave};
use weft_mesh::GridSpec;
use weft_solver::ClothSimulation;
use weft_types::{WeftError, WeftResult};

/// Cloth state at one step, serialized with `bincode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Steps taken when the snapshot was captured.
    pub step: u64,
    /// Simulated time in seconds.
    pub sim_time: f64,
    /// Particles per side.
    pub resolution: usize,
    /// Positions, flat `[x0, y0, z0, x1, ...]` in row-major particle order.
    pub positions: Vec<f32>,
    /// Velocities, same layout as `positions`.
    pub velocities: Vec<f32>,
}

impl StateSnapshot {
    /// Captures the current state of `sim`.
    pub fn from_simulation(sim: &ClothSimulation) -> Self {
        let state = sim.state();
        Self {
            step: sim.steps_taken(),
            sim_time: sim.sim_time(),
            resolution: sim.resolution(),
            positions: interleave(state.positions()),
            velocities: interleave(state.velocities()),
        }
    }

    /// `R²`, saturating for resolutions that [`StateSnapshot::check`] rejects.
    pub fn particle_count(&self) -> usize {
        self.resolution.saturating_mul(self.resolution)
    }

    /// Checks that the resolution describes a valid grid and that both
    /// buffers hold exactly `3·R²` floats.
    pub fn check(&self) -> WeftResult<()> {
        let grid = GridSpec::new(self.resolution)
            .map_err(|e| WeftError::Serialization(format!("snapshot has an invalid grid: {e}")))?;
        let expected = grid.particle_count().checked_mul(3).ok_or_else(|| {
            WeftError::Serialization(format!(
                "snapshot resolution {} overflows the buffer size",
                self.resolution
            ))
        })?;
        for (name, buf) in [("positions", &self.positions), ("velocities", &self.velocities)] {
            if buf.len() != expected {
                return Err(WeftError::Serialization(format!(
                    "snapshot {name} has {} floats, expected {expected} for R = {}",
                    buf.len(),
                    self.resolution
                )));
            }
        }
        Ok(())
    }

    /// Writes this snapshot's positions and velocities into `sim`, then
    /// recomputes normals.
    ///
    /// The simulation must have the snapshot's resolution. Step count and
    /// time are not restored.
    pub fn restore_into(&self, sim: &mut ClothSimulation) -> WeftResult<()> {
        self.check()?;
        if sim.resolution() != self.resolution {
            return Err(WeftError::ConfigurationError(format!(
                "snapshot resolution {} does not match simulation resolution {}",
                self.resolution,
                sim.resolution()
            )));
        }
        let positions = deinterleave(&self.positions)?;
        let velocities = deinterleave(&self.velocities)?;
        let grid = *sim.grid();
        for (id, coord) in grid.coords().enumerate() {
            sim.set_position(coord.i, coord.j, positions[id])?;
            sim.set_velocity(coord.i, coord.j, velocities[id])?;
        }
        sim.recompute_normals()
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> WeftResult<Vec<u8>> {
        bincode::serialize(self)
            .map_err(|e| WeftError::Serialization(format!("snapshot encode: {e}")))
    }

    /// Deserializes from binary format and checks buffer sizes.
    pub fn from_bytes(data: &[u8]) -> WeftResult<Self> {
        let snapshot: Self = bincode::deserialize(data)
            .map_err(|e| WeftError::Serialization(format!("snapshot decode: {e}")))?;
        snapshot.check()?;
        Ok(snapshot)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> WeftResult<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path.as_ref(), &bytes)?;
        tracing::debug!(path = %path.as_ref().display(), bytes = bytes.len(), "snapshot written");
        Ok(())
    }

    pub fn read_from(path: impl AsRef<Path>) -> WeftResult<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_bytes(&bytes)
    }
}
