//! Physical configuration.
//!
//! The constants that drive the force model: particle mass, spring
//! stiffness per class, damping, drag, ambient fluid velocity, gravity.
//! Set once before simulation begins and never changed while stepping.

use serde::{Deserialize, Serialize};
use weft_types::constants::{
    DEFAULT_DAMPING, DEFAULT_DRAG, DEFAULT_MASS, DEFAULT_STIFFNESS, GRAVITY,
};
use weft_types::{WeftError, WeftResult};

/// Physical constants for a cloth simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Mass of every particle.
    pub mass: f32,

    /// Spring stiffness `K` per class: `[structural, shear, flexion]`.
    pub stiffness: [f32; 3],

    /// Linear damping coefficient `Cd` (force = −Cd · v).
    pub damping: f32,

    /// Viscous drag coefficient `Cv`, applied along the particle normal.
    pub drag: f32,

    /// Ambient fluid velocity `uf` [x, y, z].
    pub fluid_velocity: [f32; 3],

    /// Gravitational acceleration magnitude, applied along −Y.
    /// Set to 0.0 to disable gravity.
    pub gravity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            mass: DEFAULT_MASS,
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            drag: DEFAULT_DRAG,
            fluid_velocity: [0.0, 0.0, 0.0],
            gravity: GRAVITY,
        }
    }
}

impl PhysicsConfig {
    /// No gravity, no damping, no drag: a flat sheet at rest stays at rest.
    pub fn still() -> Self {
        Self {
            damping: 0.0,
            drag: 0.0,
            fluid_velocity: [0.0, 0.0, 0.0],
            gravity: 0.0,
            ..Default::default()
        }
    }

    /// Default cloth in a steady wind blowing along +Z.
    pub fn breezy() -> Self {
        Self {
            fluid_velocity: [0.0, 0.0, 2.0],
            drag: 1.0,
            ..Default::default()
        }
    }

    /// Checks that every constant is defined and physically meaningful.
    ///
    /// Mass must be positive; stiffness, damping, and drag non-negative;
    /// everything finite.
    pub fn validate(&self) -> WeftResult<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(WeftError::ConfigurationError(format!(
                "particle mass must be positive and finite, got {}",
                self.mass
            )));
        }
        for (class, k) in ["structural", "shear", "flexion"].iter().zip(self.stiffness) {
            if !(k.is_finite() && k >= 0.0) {
                return Err(WeftError::ConfigurationError(format!(
                    "{class} stiffness must be non-negative and finite, got {k}"
                )));
            }
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(WeftError::ConfigurationError(format!(
                "damping coefficient must be non-negative and finite, got {}",
                self.damping
            )));
        }
        if !(self.drag.is_finite() && self.drag >= 0.0) {
            return Err(WeftError::ConfigurationError(format!(
                "drag coefficient must be non-negative and finite, got {}",
                self.drag
            )));
        }
        if !self.fluid_velocity.iter().all(|c| c.is_finite()) {
            return Err(WeftError::ConfigurationError(format!(
                "fluid velocity must be finite, got {:?}",
                self.fluid_velocity
            )));
        }
        if !self.gravity.is_finite() {
            return Err(WeftError::ConfigurationError(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        Ok(())
    }
}
