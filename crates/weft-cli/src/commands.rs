//! CLI command implementations.

use std::path::Path;
use std::time::Instant;

use weft_bench::metrics::{self, BenchmarkMetrics};
use weft_bench::runner::BenchmarkRunner;
use weft_bench::scenarios::{Scenario, ScenarioKind};
use weft_io::contract::SimulationInput;
use weft_io::export::FrameExport;
use weft_io::snapshot::StateSnapshot;
use weft_io::validator::validate_input;
use weft_telemetry::{EventBus, TracingSink};

/// Run a simulation from a run file.
pub fn simulate(
    config_path: &str,
    snapshot_path: Option<&str>,
    export_path: Option<&str>,
    every: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Weft Simulation");
    println!("───────────────");
    println!("Config: {config_path}");
    println!();

    let input = SimulationInput::load(config_path)?;
    validate_input(&input)?;
    if export_path.is_some() && every == 0 {
        return Err("--every must be at least 1".into());
    }

    let mut sim = input.build()?;
    println!(
        "Grid:        {r}×{r} ({} particles, {} triangles)",
        sim.state().len(),
        sim.topology().triangle_count(),
        r = input.resolution,
    );
    println!("Integration: {}", input.integration.name());
    println!("Schedule:    {} steps × {} s", input.steps, input.dt);
    println!();

    let mut export = export_path.map(|_| FrameExport::new(&sim));
    if let Some(export) = export.as_mut() {
        export.capture(&sim)?;
    }

    let start = Instant::now();
    let progress_every = (input.steps / 10).max(1);
    for step in 1..=input.steps {
        sim.step(input.dt)
            .map_err(|e| format!("step {step} failed: {e}"))?;
        if input.recompute_after(step) {
            sim.recompute_normals()?;
        }
        if let Some(export) = export.as_mut() {
            if step % every == 0 {
                export.capture(&sim)?;
            }
        }
        if step % progress_every == 0 {
            tracing::info!(step, sim_time = sim.sim_time(), ke = sim.kinetic_energy(), "progress");
        }
    }
    let wall = start.elapsed().as_secs_f64();

    println!("Wall time:     {wall:.3}s");
    println!("Sim time:      {:.4}s", sim.sim_time());
    println!("Final KE:      {:.6e}", sim.kinetic_energy());
    println!("Max strain:    {:.4}", metrics::max_structural_strain(&sim));
    let bottom = sim.get_position(0, 0)?;
    println!("Corner (0,0):  [{:.4}, {:.4}, {:.4}]", bottom.x, bottom.y, bottom.z);

    if let Some(path) = snapshot_path {
        StateSnapshot::from_simulation(&sim).write_to(path)?;
        println!("Snapshot written to: {path}");
    }
    if let (Some(path), Some(export)) = (export_path, export) {
        export.write_json(path)?;
        println!("{} frames written to: {path}", export.frame_count());
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    steps: Option<u32>,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Weft Benchmark Suite");
    println!("════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                return Err(format!(
                    "Unknown scenario: '{scenario_name}'. Available: {}, all",
                    available.join(", ")
                )
                .into());
            }
        }
    };

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new()));

    let mut all_metrics = Vec::new();
    for &kind in &scenarios {
        let mut scenario = Scenario::from_kind(kind);
        if let Some(steps) = steps {
            scenario = scenario.with_steps(steps);
        }

        println!(
            "Running: {} ({}×{} grid, {} steps)",
            kind.name(),
            scenario.resolution,
            scenario.resolution,
            scenario.steps,
        );

        let metrics = BenchmarkRunner::run(&scenario, &mut bus)
            .map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Max displace:  {:.4}", metrics.max_displacement);
        println!("  Max strain:    {:.4}", metrics.max_structural_strain);
        println!();

        all_metrics.push(metrics);
    }
    bus.finalize();

    if let Some(path) = output_path {
        let csv = BenchmarkMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Inspect a state snapshot.
pub fn inspect(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Weft Snapshot Inspector");
    println!("───────────────────────");
    println!();

    let snapshot = StateSnapshot::read_from(path)?;

    println!("Step:         {}", snapshot.step);
    println!("Sim time:     {:.4}s", snapshot.sim_time);
    println!("Resolution:   {}", snapshot.resolution);
    println!("Particles:    {}", snapshot.particle_count());

    let axis = |buf: &[f32], k: usize| -> (f32, f32) {
        buf.iter()
            .skip(k)
            .step_by(3)
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    };
    if snapshot.particle_count() > 0 {
        for (k, name) in ["X", "Y", "Z"].iter().enumerate() {
            let (lo, hi) = axis(&snapshot.positions, k);
            println!("{name} range:      [{lo:.4}, {hi:.4}]");
        }
        let max_speed = snapshot
            .velocities
            .chunks_exact(3)
            .map(|v| (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt())
            .fold(0.0f32, f32::max);
        println!("Max speed:    {max_speed:.4}");
    }

    Ok(())
}

/// Validate a run file or snapshot.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Weft Validator");
    println!("──────────────");
    println!();

    let is_snapshot = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("bin"));

    if is_snapshot {
        println!("Validating snapshot: {path}");
        match StateSnapshot::read_from(path) {
            Ok(s) => println!("✅ Snapshot is valid ({} particles, step {}).", s.particle_count(), s.step),
            Err(e) => println!("❌ Snapshot validation failed: {e}"),
        }
    } else {
        println!("Validating run file: {path}");
        let input = SimulationInput::load(path)?;
        match validate_input(&input) {
            Ok(()) => println!(
                "✅ Run file is valid ({r}×{r} grid, {} steps).",
                input.steps,
                r = input.resolution
            ),
            Err(e) => println!("❌ Run file validation failed: {e}"),
        }
    }

    Ok(())
}
