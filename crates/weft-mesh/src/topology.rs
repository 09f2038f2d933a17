//! Render-only connectivity for the cloth grid.
//!
//! The simulation never reads these buffers. They exist so a renderer can
//! draw the sheet as shaded triangles or as a wireframe without knowing the
//! grid layout.

use serde::{Deserialize, Serialize};

use crate::grid::GridSpec;

/// Triangle and wireframe index buffers for a cloth grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothTopology {
    /// Triangle indices, flat: `[t0v0, t0v1, t0v2, t1v0, ...]`.
    ///
    /// Two triangles per cell, both wound counter-clockwise when viewed
    /// from +Z on the flat sheet:
    /// `(i,j) (i,j+1) (i+1,j+1)` and `(i,j) (i+1,j+1) (i+1,j)`.
    pub triangles: Vec<u32>,

    /// Wireframe edges as index pairs, flat: `[e0a, e0b, e1a, e1b, ...]`.
    ///
    /// Each particle contributes its right, up, and up-right diagonal edge
    /// where those neighbours exist.
    pub wire: Vec<u32>,
}

impl ClothTopology {
    /// Build both index buffers for `grid`.
    pub fn build(grid: &GridSpec) -> Self {
        let r = grid.resolution();
        let cells = (r - 1) * (r - 1);
        let mut triangles = Vec::with_capacity(cells * 6);
        let mut wire = Vec::with_capacity((r * (r - 1) * 2 + cells) * 2);

        let id = |i: usize, j: usize| grid.index(i, j) as u32;

        for i in 0..r {
            for j in 0..r {
                if j + 1 < r {
                    wire.extend_from_slice(&[id(i, j), id(i, j + 1)]);
                }
                if i + 1 < r {
                    wire.extend_from_slice(&[id(i, j), id(i + 1, j)]);
                }
                if i + 1 < r && j + 1 < r {
                    wire.extend_from_slice(&[id(i, j), id(i + 1, j + 1)]);
                }
            }
        }

        for i in 0..r - 1 {
            for j in 0..r - 1 {
                triangles.extend_from_slice(&[id(i, j), id(i, j + 1), id(i + 1, j + 1)]);
                triangles.extend_from_slice(&[id(i, j), id(i + 1, j + 1), id(i + 1, j)]);
            }
        }

        Self { triangles, wire }
    }

    /// Returns the number of triangles (`2·(R-1)²`).
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Returns the number of wireframe edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.wire.len() / 2
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.triangles[base], self.triangles[base + 1], self.triangles[base + 2]]
    }

    /// Returns the two vertex indices of wire edge `e`.
    #[inline]
    pub fn edge(&self, e: usize) -> [u32; 2] {
        [self.wire[e * 2], self.wire[e * 2 + 1]]
    }
}
