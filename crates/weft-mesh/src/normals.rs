//! Per-particle normal estimation from the surrounding triangle fan.
//!
//! Each particle looks at a hexagonal ring of six grid neighbours. Every
//! consecutive pair of in-bounds ring neighbours, together with the particle
//! itself, forms a triangle. The particle normal is the normalized sum of
//! those triangles' unit normals.

use weft_math::{checked_normalize, Vec3};
use weft_types::{GridCoord, WeftError, WeftResult};

use crate::grid::GridSpec;

/// Ordered `(Δi, Δj)` ring around a particle, counter-clockwise in (j, i).
///
/// Consecutive entries (wrapping from the last to the first) span the six
/// triangles incident to the particle in the grid triangulation.
pub const HEX_RING: [(isize, isize); 6] = [(0, 1), (1, 1), (1, 0), (0, -1), (-1, -1), (-1, 0)];

/// Computes the normal of a single particle from current positions.
///
/// Fails with `NumericalDegeneracy` if any contributing triangle has zero
/// area or the contributions cancel out.
pub fn particle_normal(grid: &GridSpec, positions: &[Vec3], coord: GridCoord) -> WeftResult<Vec3> {
    let p0 = positions[grid.index(coord.i, coord.j)];
    let mut sum = Vec3::ZERO;
    let mut contributing = 0;

    for t in 0..HEX_RING.len() {
        let (di1, dj1) = HEX_RING[t];
        let (di2, dj2) = HEX_RING[(t + 1) % HEX_RING.len()];
        let (Some(a), Some(b)) = (grid.offset(coord, di1, dj1), grid.offset(coord, di2, dj2)) else {
            continue;
        };
        let e1 = positions[grid.index(a.i, a.j)] - p0;
        let e2 = positions[grid.index(b.i, b.j)] - p0;
        sum += checked_normalize(e1.cross(e2), || {
            format!("triangle normal at ({}, {}), ring slot {t}", coord.i, coord.j)
        })?;
        contributing += 1;
    }

    if contributing == 0 {
        return Err(WeftError::NumericalDegeneracy(format!(
            "particle ({}, {}) has no incident triangles",
            coord.i, coord.j
        )));
    }
    checked_normalize(sum, || format!("vertex normal at ({}, {})", coord.i, coord.j))
}

/// Recompute every particle normal from `positions` into `normals`.
///
/// Both slices are indexed by the grid's linear id. This is O(R²) and is
/// not kept in sync with position changes automatically; callers decide
/// when normals need refreshing.
///
/// On error, normals of particles visited before the failing one have
/// already been overwritten.
pub fn recompute_normals(grid: &GridSpec, positions: &[Vec3], normals: &mut [Vec3]) -> WeftResult<()> {
    let n = grid.particle_count();
    if positions.len() != n || normals.len() != n {
        return Err(WeftError::ConfigurationError(format!(
            "normal buffers sized {}/{} for a grid of {} particles",
            positions.len(),
            normals.len(),
            n
        )));
    }

    for (id, coord) in grid.coords().enumerate() {
        normals[id] = particle_normal(grid, positions, coord)?;
    }
    Ok(())
}
