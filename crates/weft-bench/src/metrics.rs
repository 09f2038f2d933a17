//! Benchmark metrics: data collected during a benchmark run, plus the
//! energy and strain measures computed from a simulation's state.

use serde::{Deserialize, Serialize};
use weft_mesh::SpringClass;
use weft_solver::ClothSimulation;

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Integration scheme name.
    pub integration: String,
    /// Particles per side.
    pub resolution: usize,
    pub particle_count: usize,
    pub triangle_count: usize,
    /// Number of steps executed.
    pub steps: u32,
    /// Total wall-clock time (seconds), including normal passes.
    pub total_wall_time: f64,
    /// Average wall-clock time per step (seconds).
    pub avg_step_time: f64,
    pub min_step_time: f64,
    pub max_step_time: f64,
    /// Number of normal recomputations.
    pub normal_passes: u32,
    /// Final kinetic energy.
    pub final_kinetic_energy: f64,
    /// Largest particle distance from its initial position.
    pub max_displacement: f32,
    /// Largest structural stretch `(len − L0) / L0` in the final state.
    pub max_structural_strain: f32,
}

impl BenchmarkMetrics {
    pub fn to_csv_header() -> String {
        "scenario,integration,resolution,particle_count,triangle_count,steps,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,normal_passes,final_ke,max_displacement,max_structural_strain".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{},{:.6e},{:.6},{:.6}",
            self.scenario,
            self.integration,
            self.resolution,
            self.particle_count,
            self.triangle_count,
            self.steps,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.normal_passes,
            self.final_kinetic_energy,
            self.max_displacement,
            self.max_structural_strain,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}

/// Calls `f(class, current_length, rest_length)` once per spring.
fn for_each_spring(sim: &ClothSimulation, mut f: impl FnMut(SpringClass, f32, f32)) {
    let grid = sim.grid();
    let positions = sim.state().positions();
    let rest = sim.rest_lengths();
    for (id, coord) in grid.coords().enumerate() {
        for partner in grid.spring_partners(coord) {
            let other = grid.index(partner.coord.i, partner.coord.j);
            // Each spring appears in both endpoints' stencils.
            if other > id {
                let len = positions[id].distance(positions[other]);
                f(partner.class, len, rest[partner.class]);
            }
        }
    }
}

/// Largest structural stretch `(len − L0) / L0`. Zero for an unstretched sheet.
pub fn max_structural_strain(sim: &ClothSimulation) -> f32 {
    let mut max = 0.0f32;
    for_each_spring(sim, |class, len, rest| {
        if class == SpringClass::Structural {
            max = max.max((len - rest) / rest);
        }
    });
    max
}

/// Spring potential `Σ ½·K·(len − L0)²`, each spring counted once.
pub fn elastic_energy(sim: &ClothSimulation) -> f64 {
    let k = sim.config().stiffness;
    let mut sum = 0.0f64;
    for_each_spring(sim, |class, len, rest| {
        let stretch = (len - rest) as f64;
        sum += 0.5 * k[class.index()] as f64 * stretch * stretch;
    });
    sum
}

/// Gravitational potential `m·g·Σy`, measured from `y = 0`.
pub fn potential_energy(sim: &ClothSimulation) -> f64 {
    let config = sim.config();
    let sum_y: f64 = sim.state().positions().iter().map(|p| p.y as f64).sum();
    config.mass as f64 * config.gravity as f64 * sum_y
}
