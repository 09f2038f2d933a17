//! Run file validation.
//!
//! Catches bad inputs before a simulation is built, with messages that
//! name the offending field.

use weft_mesh::GridSpec;
use weft_types::{WeftError, WeftResult};

use crate::contract::SimulationInput;

/// Largest timestep accepted in a run file.
pub const MAX_DT: f32 = 1.0;

/// Validates a complete simulation input.
///
/// Checks:
/// - Resolution gives at least a 2×2 grid
/// - Physical constants are finite and meaningful
/// - Timestep, step count, and normal interval are usable
pub fn validate_input(input: &SimulationInput) -> WeftResult<()> {
    GridSpec::new(input.resolution)?;
    input.physics.validate()?;
    validate_schedule(input)?;
    Ok(())
}

fn validate_schedule(input: &SimulationInput) -> WeftResult<()> {
    if !(input.dt.is_finite() && input.dt > 0.0) {
        return Err(WeftError::ConfigurationError(format!(
            "dt must be positive and finite, got {}",
            input.dt
        )));
    }
    if input.dt > MAX_DT {
        return Err(WeftError::ConfigurationError(format!(
            "dt = {} exceeds {MAX_DT} s",
            input.dt
        )));
    }
    if input.steps == 0 {
        return Err(WeftError::ConfigurationError("steps must be >= 1".into()));
    }
    if input.normal_interval == 0 {
        return Err(WeftError::ConfigurationError(
            "normal_interval must be >= 1".into(),
        ));
    }
    Ok(())
}
