//! Grid coordinates for particles.

use serde::{Deserialize, Serialize};

/// Row/column coordinate of a particle on the cloth grid.
///
/// `i` is the row (grows along +Y), `j` is the column (grows along +X).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub i: usize,
    pub j: usize,
}

impl GridCoord {
    #[inline]
    pub const fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

impl From<(usize, usize)> for GridCoord {
    fn from((i, j): (usize, usize)) -> Self {
        Self { i, j }
    }
}
