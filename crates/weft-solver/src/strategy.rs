//! Integration scheme trait: the seam between the simulation and its
//! time-stepping rule.
//!
//! Every scheme advances unpinned particles by one explicit step. Schemes
//! differ only in which state the force evaluation sees; see
//! [`SequentialEuler`](crate::euler::SequentialEuler) and
//! [`SnapshotEuler`](crate::euler::SnapshotEuler).

use serde::{Deserialize, Serialize};
use weft_types::{WeftError, WeftResult};

use crate::euler::{SequentialEuler, SnapshotEuler};
use crate::forces::ForceModel;
use crate::state::ParticleState;

/// Result of one integration step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Number of particles whose state was advanced (all but the pinned ones).
    pub particles_updated: usize,
    /// Largest particle speed after the step.
    pub max_speed: f32,
    /// Wall-clock time for this step (seconds).
    pub wall_time: f64,
}

/// Trait for time integration schemes.
///
/// The simulation calls `step` once per tick. Normals are not refreshed
/// inside a step; the caller decides when to recompute them.
pub trait IntegrationScheme: Send {
    /// Advance `state` by `dt` seconds using `forces`.
    ///
    /// Pinned particles are skipped entirely.
    fn step(
        &mut self,
        state: &mut ParticleState,
        forces: &ForceModel,
        dt: f32,
    ) -> WeftResult<StepResult>;

    /// Returns the scheme's name.
    fn name(&self) -> &str;
}

/// Selects an [`IntegrationScheme`] from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMode {
    /// In-place row-major update (Gauss-Seidel coupling).
    #[default]
    Sequential,
    /// All forces from the start-of-step state, then update (Jacobi).
    Snapshot,
}

impl IntegrationMode {
    /// Builds a fresh scheme for this mode.
    pub fn scheme(self) -> Box<dyn IntegrationScheme> {
        match self {
            IntegrationMode::Sequential => Box::new(SequentialEuler::new()),
            IntegrationMode::Snapshot => Box::new(SnapshotEuler::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            IntegrationMode::Sequential => "sequential",
            IntegrationMode::Snapshot => "snapshot",
        }
    }
}

/// Rejects non-finite or non-positive timesteps.
pub fn check_dt(dt: f32) -> WeftResult<()> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(WeftError::ConfigurationError(format!(
            "timestep must be positive and finite, got {dt}"
        )))
    }
}
