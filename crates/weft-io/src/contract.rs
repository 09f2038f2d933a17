//! Run contract: everything needed to set up and drive one simulation.
//!
//! [`SimulationInput`] is the boundary type the CLI and benchmark harness
//! load from disk. Every field has a default, so a config file only needs
//! to name what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use weft_solver::{ClothSimulation, IntegrationMode, PhysicsConfig};
use weft_types::constants::{DEFAULT_DT, DEFAULT_NORMAL_INTERVAL, DEFAULT_RESOLUTION, DEFAULT_STEPS};
use weft_types::{WeftError, WeftResult};

/// Everything needed to build and run one simulation.
///
/// ```toml
/// resolution = 20
/// dt = 0.002
/// steps = 1000
/// normal_interval = 1
/// integration = "sequential"
///
/// [physics]
/// mass = 1.0
/// stiffness = [25000.0, 25000.0, 25000.0]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationInput {
    /// Particles per side.
    pub resolution: usize,
    /// Timestep in seconds.
    pub dt: f32,
    /// Number of steps to run.
    pub steps: u32,
    /// Recompute normals every this many steps.
    pub normal_interval: u32,
    /// Integration scheme.
    pub integration: IntegrationMode,
    /// Physical constants.
    pub physics: PhysicsConfig,
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            dt: DEFAULT_DT,
            steps: DEFAULT_STEPS,
            normal_interval: DEFAULT_NORMAL_INTERVAL,
            integration: IntegrationMode::default(),
            physics: PhysicsConfig::default(),
        }
    }
}

/// On-disk format of a run file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Toml,
    Json,
}

impl InputFormat {
    /// `.json` files are JSON; anything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Toml,
        }
    }
}

impl SimulationInput {
    pub fn from_toml_str(s: &str) -> WeftResult<Self> {
        toml::from_str(s).map_err(|e| WeftError::Serialization(format!("TOML: {e}")))
    }

    pub fn from_json_str(s: &str) -> WeftResult<Self> {
        serde_json::from_str(s).map_err(|e| WeftError::Serialization(format!("JSON: {e}")))
    }

    pub fn to_toml_string(&self) -> WeftResult<String> {
        toml::to_string_pretty(self).map_err(|e| WeftError::Serialization(format!("TOML: {e}")))
    }

    pub fn to_json_string(&self) -> WeftResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| WeftError::Serialization(format!("JSON: {e}")))
    }

    /// Reads a run file, choosing the parser from the file extension.
    pub fn load(path: impl AsRef<Path>) -> WeftResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let input = match InputFormat::from_path(path) {
            InputFormat::Json => Self::from_json_str(&text)?,
            InputFormat::Toml => Self::from_toml_str(&text)?,
        };
        tracing::debug!(path = %path.display(), resolution = input.resolution, "loaded run file");
        Ok(input)
    }

    /// Builds a fresh simulation from this input.
    pub fn build(&self) -> WeftResult<ClothSimulation> {
        ClothSimulation::with_integration(self.resolution, self.physics.clone(), self.integration)
    }

    /// True when normals should be recomputed after step `step` (1-based).
    pub fn recompute_after(&self, step: u32) -> bool {
        self.normal_interval > 0 && step % self.normal_interval == 0
    }

    /// Total simulated time of the run.
    pub fn duration(&self) -> f64 {
        self.dt as f64 * self.steps as f64
    }
}
