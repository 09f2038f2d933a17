//! # weft-bench
//!
//! Benchmark suite for the Weft cloth simulator.
//!
//! Provides canned scenarios, a runner that reports through the telemetry
//! bus, and metrics with CSV export for regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
