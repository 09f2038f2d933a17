//! JSON frame export for external viewers.
//!
//! The export carries the render topology once and positions per frame:
//!
//! ```json
//! {
//!   "resolution": 3,
//!   "vertex_count": 9,
//!   "triangles": [0, 1, 4, ...],
//!   "wire": [0, 1, 0, 3, ...],
//!   "frames": [{ "step": 0, "sim_time": 0.0, "positions": [-2.0, -2.0, 0.0, ...] }]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use weft_math::vector::interleave;
use weft_solver::ClothSimulation;
use weft_types::{WeftError, WeftResult};

/// One captured frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub step: u64,
    pub sim_time: f64,
    /// Flat `[x0, y0, z0, ...]`.
    pub positions: Vec<f32>,
}

/// A sequence of frames sharing one topology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameExport {
    pub resolution: usize,
    pub vertex_count: usize,
    pub triangles: Vec<u32>,
    pub wire: Vec<u32>,
    pub frames: Vec<Frame>,
}

impl FrameExport {
    /// Starts an export with `sim`'s topology and no frames.
    pub fn new(sim: &ClothSimulation) -> Self {
        Self {
            resolution: sim.resolution(),
            vertex_count: sim.state().len(),
            triangles: sim.triangle_indices().to_vec(),
            wire: sim.wire_indices().to_vec(),
            frames: Vec::new(),
        }
    }

    /// Appends the current positions of `sim`.
    pub fn capture(&mut self, sim: &ClothSimulation) -> WeftResult<()> {
        if sim.state().len() != self.vertex_count {
            return Err(WeftError::ConfigurationError(format!(
                "frame has {} vertices, export expects {}",
                sim.state().len(),
                self.vertex_count
            )));
        }
        self.frames.push(Frame {
            step: sim.steps_taken(),
            sim_time: sim.sim_time(),
            positions: interleave(sim.state().positions()),
        });
        Ok(())
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn to_json_string(&self) -> WeftResult<String> {
        serde_json::to_string(self).map_err(|e| WeftError::Serialization(format!("JSON: {e}")))
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> WeftResult<()> {
        std::fs::write(path.as_ref(), self.to_json_string()?)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            frames = self.frames.len(),
            "frames exported"
        );
        Ok(())
    }
}
