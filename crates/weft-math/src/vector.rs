//! Checked vector operations.
//!
//! `glam` silently returns NaN (or zero, for `normalize_or_zero`) when asked
//! to normalize a zero vector. The simulation treats that case as a
//! degeneracy, so every normalize in the core goes through these helpers.

use glam::Vec3;
use weft_types::{WeftError, WeftResult};

/// Normalizes `v`, failing if it has zero or non-finite length.
///
/// `what` names the vector in the error message. It is only called on
/// failure, so hot loops pay nothing for the label.
pub fn checked_normalize(v: Vec3, what: impl FnOnce() -> String) -> WeftResult<Vec3> {
    let len_sq = v.length_squared();
    if !(len_sq > 0.0 && len_sq.is_finite()) {
        return Err(WeftError::NumericalDegeneracy(format!(
            "cannot normalize {}: length² = {len_sq}",
            what()
        )));
    }
    Ok(v / len_sq.sqrt())
}

/// Returns `(length, unit direction)` of `v`, failing on zero length.
pub fn checked_direction(v: Vec3, what: impl FnOnce() -> String) -> WeftResult<(f32, Vec3)> {
    let len = v.length();
    if !(len > 0.0 && len.is_finite()) {
        return Err(WeftError::NumericalDegeneracy(format!(
            "{} has length {len}",
            what()
        )));
    }
    Ok((len, v / len))
}

/// Interleaves a slice of vectors into `[x0, y0, z0, x1, y1, z1, ...]`.
pub fn interleave(vs: &[Vec3]) -> Vec<f32> {
    let mut out = Vec::with_capacity(vs.len() * 3);
    for v in vs {
        out.extend_from_slice(&v.to_array());
    }
    out
}

/// Inverse of [`interleave`]. Fails if the length is not a multiple of 3.
pub fn deinterleave(flat: &[f32]) -> WeftResult<Vec<Vec3>> {
    if flat.len() % 3 != 0 {
        return Err(WeftError::Serialization(format!(
            "interleaved buffer length {} is not divisible by 3",
            flat.len()
        )));
    }
    Ok(flat
        .chunks_exact(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
        .collect())
}
