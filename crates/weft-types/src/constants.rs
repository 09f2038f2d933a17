//! Physical constants and simulation defaults.

/// Gravitational acceleration (m/s²), applied along −Y.
pub const GRAVITY: f32 = 9.8;

/// Side length of the square cloth sheet in world units.
///
/// The sheet spans `[-SHEET_SIZE/2, SHEET_SIZE/2]` in X and Y.
pub const SHEET_SIZE: f32 = 4.0;

/// Smallest grid resolution with at least one cell.
pub const MIN_RESOLUTION: usize = 2;

/// Default grid resolution (particles per side).
pub const DEFAULT_RESOLUTION: usize = 20;

/// Default simulation timestep (seconds).
pub const DEFAULT_DT: f32 = 0.002;

/// Default particle mass.
pub const DEFAULT_MASS: f32 = 1.0;

/// Default stiffness for structural, shear, and flexion springs.
pub const DEFAULT_STIFFNESS: [f32; 3] = [25_000.0, 25_000.0, 25_000.0];

/// Default linear damping coefficient (Cd).
pub const DEFAULT_DAMPING: f32 = 0.5;

/// Default viscous drag coefficient (Cv).
pub const DEFAULT_DRAG: f32 = 0.5;

/// Default number of steps in a run.
pub const DEFAULT_STEPS: u32 = 1000;

/// Default number of steps between normal recomputations.
pub const DEFAULT_NORMAL_INTERVAL: u32 = 1;
