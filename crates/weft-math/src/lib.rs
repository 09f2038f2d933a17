//! # weft-math
//!
//! Vector primitives for the Weft cloth simulator.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`) as the vector collaborator
//! - Checked normalize/direction helpers that report degeneracies as errors
//! - Interleave/deinterleave helpers for flat `[x, y, z, ...]` buffers

pub mod vector;

// Re-export glam types as the canonical math types for Weft.
pub use glam::Vec3;
pub use vector::{checked_direction, checked_normalize};
