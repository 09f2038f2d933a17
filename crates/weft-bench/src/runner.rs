//! Benchmark runner: drives a scenario's simulation and collects metrics.

use std::time::Instant;

use weft_math::Vec3;
use weft_solver::ClothSimulation;
use weft_telemetry::{EventBus, EventKind, SimulationEvent};
use weft_types::WeftResult;

use crate::metrics::{self, BenchmarkMetrics};
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario, reporting progress on `bus`.
    ///
    /// The bus is flushed after every step. If a step fails, a
    /// `StepFailed` event is flushed before the error is returned.
    pub fn run(scenario: &Scenario, bus: &mut EventBus) -> WeftResult<BenchmarkMetrics> {
        let mut sim = ClothSimulation::with_integration(
            scenario.resolution,
            scenario.config.clone(),
            scenario.integration,
        )?;
        let initial: Vec<Vec3> = sim.state().positions().to_vec();

        tracing::info!(
            scenario = scenario.kind.name(),
            resolution = scenario.resolution,
            steps = scenario.steps,
            integration = scenario.integration.name(),
            "benchmark started"
        );
        bus.emit(energy_event(&sim));

        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.steps as usize);
        let mut normal_passes = 0u32;
        let total_start = Instant::now();

        for step in 1..=scenario.steps {
            bus.emit(SimulationEvent::new(
                sim.steps_taken(),
                EventKind::StepBegin { sim_time: sim.sim_time() },
            ));

            let result = match sim.step(scenario.dt) {
                Ok(result) => result,
                Err(e) => {
                    bus.emit(SimulationEvent::new(
                        sim.steps_taken(),
                        EventKind::StepFailed { reason: e.to_string() },
                    ));
                    bus.flush();
                    return Err(e);
                }
            };
            step_times.push(result.wall_time);
            bus.emit(SimulationEvent::new(
                sim.steps_taken(),
                EventKind::StepEnd {
                    wall_time: result.wall_time,
                    particles_updated: result.particles_updated as u32,
                    max_speed: result.max_speed,
                },
            ));

            if scenario.normal_interval > 0 && step % scenario.normal_interval == 0 {
                let start = Instant::now();
                sim.recompute_normals()?;
                normal_passes += 1;
                bus.emit(SimulationEvent::new(
                    sim.steps_taken(),
                    EventKind::NormalsRecomputed { wall_time: start.elapsed().as_secs_f64() },
                ));
            }
            bus.flush();
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();
        bus.emit(energy_event(&sim));
        bus.flush();

        let max_displacement = sim
            .state()
            .positions()
            .iter()
            .zip(&initial)
            .map(|(p, p0)| p.distance(*p0))
            .fold(0.0f32, f32::max);

        let avg_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step = step_times.iter().copied().fold(f64::MAX, f64::min);
        let max_step = step_times.iter().copied().fold(0.0, f64::max);

        let metrics = BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            integration: scenario.integration.name().to_string(),
            resolution: sim.resolution(),
            particle_count: sim.state().len(),
            triangle_count: sim.topology().triangle_count(),
            steps: scenario.steps,
            total_wall_time,
            avg_step_time: avg_step,
            min_step_time: if step_times.is_empty() { 0.0 } else { min_step },
            max_step_time: max_step,
            normal_passes,
            final_kinetic_energy: sim.kinetic_energy(),
            max_displacement,
            max_structural_strain: metrics::max_structural_strain(&sim),
        };
        tracing::info!(
            scenario = %metrics.scenario,
            wall_time = metrics.total_wall_time,
            final_ke = metrics.final_kinetic_energy,
            "benchmark finished"
        );
        Ok(metrics)
    }

    /// Run every scenario and return metrics for each.
    pub fn run_all(bus: &mut EventBus) -> WeftResult<Vec<BenchmarkMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind);
            results.push(Self::run(&scenario, bus)?);
        }
        Ok(results)
    }
}

fn energy_event(sim: &ClothSimulation) -> SimulationEvent {
    SimulationEvent::new(
        sim.steps_taken(),
        EventKind::Energy {
            kinetic: sim.kinetic_energy(),
            potential: metrics::potential_energy(sim),
            elastic: metrics::elastic_energy(sim),
        },
    )
}
