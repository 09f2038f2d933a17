//! Particle index space of the square cloth grid.
//!
//! Particles are laid out row-major: `id = i * R + j`, where `i` is the row
//! and `j` the column. All neighbour lookups go through [`GridSpec::offset`],
//! which is the single place bounds are checked.

use serde::{Deserialize, Serialize};
use weft_types::constants::{MIN_RESOLUTION, SHEET_SIZE};
use weft_types::{GridCoord, WeftError, WeftResult};

/// Dimensions of an `R × R` cloth grid.
///
/// Immutable once built. Changing the resolution means building a new
/// `GridSpec` (and re-initializing everything that depends on it).
/// Serializes as the bare resolution; deserializing goes through
/// [`GridSpec::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct GridSpec {
    resolution: usize,
}

impl GridSpec {
    /// Creates a grid with `resolution` particles per side.
    ///
    /// Returns `ConfigurationError` for `resolution < 2`: the spacing
    /// `4 / (R - 1)` is undefined below that.
    pub fn new(resolution: usize) -> WeftResult<Self> {
        if resolution < MIN_RESOLUTION {
            return Err(WeftError::ConfigurationError(format!(
                "mesh resolution must be at least {MIN_RESOLUTION}, got {resolution}"
            )));
        }
        if resolution.checked_mul(resolution).map_or(true, |n| n > u32::MAX as usize) {
            return Err(WeftError::ConfigurationError(format!(
                "mesh resolution {resolution} overflows the u32 index space"
            )));
        }
        Ok(Self { resolution })
    }

    /// Particles per side (`R`).
    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Total particle count (`R²`).
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.resolution * self.resolution
    }

    /// Distance between axis-aligned neighbours on the flat sheet.
    #[inline]
    pub fn spacing(&self) -> f32 {
        SHEET_SIZE / (self.resolution - 1) as f32
    }

    /// Returns true if `(i, j)` lies on the grid.
    #[inline]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        i < self.resolution && j < self.resolution
    }

    /// Row-major linear index of `(i, j)`. Caller guarantees bounds.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(self.contains(i, j));
        i * self.resolution + j
    }

    /// Inverse of [`GridSpec::index`].
    #[inline]
    pub fn coord(&self, index: usize) -> GridCoord {
        GridCoord::new(index / self.resolution, index % self.resolution)
    }

    /// Bounds-checked linear index, for the public accessors.
    pub fn checked_index(&self, i: usize, j: usize) -> WeftResult<usize> {
        if self.contains(i, j) {
            Ok(self.index(i, j))
        } else {
            Err(WeftError::InvalidCoordinate {
                i,
                j,
                resolution: self.resolution,
            })
        }
    }

    /// Applies a signed grid offset, returning `None` if it leaves the grid.
    pub fn offset(&self, coord: GridCoord, di: isize, dj: isize) -> Option<GridCoord> {
        let i = coord.i.checked_add_signed(di)?;
        let j = coord.j.checked_add_signed(dj)?;
        self.contains(i, j).then_some(GridCoord::new(i, j))
    }

    /// The two permanently pinned corners: `(R-1, 0)` and `(R-1, R-1)`.
    pub fn pinned(&self) -> [GridCoord; 2] {
        let top = self.resolution - 1;
        [GridCoord::new(top, 0), GridCoord::new(top, top)]
    }

    /// Returns true if the particle at `coord` is pinned.
    #[inline]
    pub fn is_pinned(&self, coord: GridCoord) -> bool {
        coord.i == self.resolution - 1 && (coord.j == 0 || coord.j == self.resolution - 1)
    }

    /// Iterates all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = GridCoord> + '_ {
        (0..self.resolution)
            .flat_map(move |i| (0..self.resolution).map(move |j| GridCoord::new(i, j)))
    }
}

impl TryFrom<usize> for GridSpec {
    type Error = WeftError;

    fn try_from(resolution: usize) -> WeftResult<Self> {
        Self::new(resolution)
    }
}

impl From<GridSpec> for usize {
    fn from(grid: GridSpec) -> usize {
        grid.resolution
    }
}
