//! # weft-solver
//!
//! Particle state, force assembly, and time integration for the
//! mass-spring cloth.
//!
//! ## Key Types
//!
//! - [`ClothSimulation`]: Owns grid, state, constants; the entry point
//! - [`ParticleState`]: Position, velocity, and normal buffers
//! - [`ForceModel`]: Springs, gravity, damping, viscous drag
//! - [`IntegrationScheme`]: Pluggable stepping rule
//!   ([`SequentialEuler`], [`SnapshotEuler`])
//! - [`PhysicsConfig`]: Mass, stiffness, damping, drag, fluid velocity, gravity

pub mod config;
pub mod euler;
pub mod forces;
pub mod simulation;
pub mod state;
pub mod strategy;

pub use config::PhysicsConfig;
pub use euler::{SequentialEuler, SnapshotEuler};
pub use forces::ForceModel;
pub use simulation::ClothSimulation;
pub use state::ParticleState;
pub use strategy::{IntegrationMode, IntegrationScheme, StepResult};
