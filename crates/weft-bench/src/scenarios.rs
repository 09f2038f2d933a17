//! Benchmark scenarios: grid size, physics, and schedule for each case.
//!
//! Three canonical scenarios:
//! 1. **Hanging cloth**: default constants, two corners pinned, falls under gravity
//! 2. **Breeze**: hanging cloth in a steady wind along +Z
//! 3. **Weightless**: no gravity, damping, or drag; the sheet should not move

use serde::{Deserialize, Serialize};

use weft_solver::{IntegrationMode, PhysicsConfig};
use weft_types::constants::{DEFAULT_DT, DEFAULT_RESOLUTION};

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    HangingCloth,
    Breeze,
    Weightless,
}

impl ScenarioKind {
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::HangingCloth,
            ScenarioKind::Breeze,
            ScenarioKind::Weightless,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::HangingCloth => "hanging_cloth",
            ScenarioKind::Breeze => "breeze",
            ScenarioKind::Weightless => "weightless",
        }
    }

    /// Looks a scenario up by [`ScenarioKind::name`].
    pub fn from_name(name: &str) -> Option<ScenarioKind> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub kind: ScenarioKind,
    /// Particles per side.
    pub resolution: usize,
    pub config: PhysicsConfig,
    pub integration: IntegrationMode,
    /// Timestep size (seconds).
    pub dt: f32,
    /// Number of steps to simulate.
    pub steps: u32,
    /// Recompute normals every this many steps.
    pub normal_interval: u32,
}

impl Scenario {
    /// A 20×20 sheet hanging from its top corners for one simulated second.
    pub fn hanging_cloth() -> Self {
        Self {
            kind: ScenarioKind::HangingCloth,
            resolution: DEFAULT_RESOLUTION,
            config: PhysicsConfig::default(),
            integration: IntegrationMode::Sequential,
            dt: DEFAULT_DT,
            steps: 500,
            normal_interval: 1,
        }
    }

    /// The hanging sheet with wind. Normals are refreshed every step since
    /// drag depends on them.
    pub fn breeze() -> Self {
        Self {
            kind: ScenarioKind::Breeze,
            config: PhysicsConfig::breezy(),
            ..Self::hanging_cloth()
        }
    }

    /// A sheet with every external force switched off. Measures raw step
    /// cost; displacement should stay at round-off level.
    pub fn weightless() -> Self {
        Self {
            kind: ScenarioKind::Weightless,
            config: PhysicsConfig::still(),
            normal_interval: 10,
            ..Self::hanging_cloth()
        }
    }

    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::HangingCloth => Self::hanging_cloth(),
            ScenarioKind::Breeze => Self::breeze(),
            ScenarioKind::Weightless => Self::weightless(),
        }
    }

    /// Overrides the step count.
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Overrides the integration scheme.
    pub fn with_integration(mut self, integration: IntegrationMode) -> Self {
        self.integration = integration;
        self
    }
}
