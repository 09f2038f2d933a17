//! Spring classes, rest lengths, and the neighbour stencil.
//!
//! Springs are not stored per pair. Every particle finds its partners by
//! walking [`SPRING_STENCIL`], a fixed table of grid offsets tagged with the
//! spring class they belong to. The class of any pair is a pure function of
//! its grid offset.

use serde::{Deserialize, Serialize};
use weft_types::constants::SHEET_SIZE;
use weft_types::GridCoord;

use crate::grid::GridSpec;

/// The three spring families of the mass-spring cloth model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpringClass {
    /// Axis-aligned neighbours one step apart.
    Structural = 0,
    /// Diagonal neighbours one step apart.
    Shear = 1,
    /// Axis-aligned neighbours two steps apart (resists bending).
    Flexion = 2,
}

impl SpringClass {
    /// All classes, in index order.
    pub const ALL: [SpringClass; 3] = [
        SpringClass::Structural,
        SpringClass::Shear,
        SpringClass::Flexion,
    ];

    /// Index into per-class tables (`stiffness`, rest lengths).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Classifies a grid offset, or `None` if no spring spans it.
    pub fn from_offset(di: isize, dj: isize) -> Option<SpringClass> {
        match (di.abs(), dj.abs()) {
            (1, 0) | (0, 1) => Some(SpringClass::Structural),
            (1, 1) => Some(SpringClass::Shear),
            (2, 0) | (0, 2) => Some(SpringClass::Flexion),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpringClass::Structural => "structural",
            SpringClass::Shear => "shear",
            SpringClass::Flexion => "flexion",
        }
    }
}

/// One entry of the spring stencil: a grid offset and its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StencilEntry {
    pub di: isize,
    pub dj: isize,
    pub class: SpringClass,
}

const fn entry(di: isize, dj: isize, class: SpringClass) -> StencilEntry {
    StencilEntry { di, dj, class }
}

/// The 12 potential spring partners of a particle.
///
/// Axis directions are listed nearest-first (structural, then flexion),
/// followed by the four shear diagonals. Force sums follow this order.
pub const SPRING_STENCIL: [StencilEntry; 12] = [
    entry(-1, 0, SpringClass::Structural),
    entry(-2, 0, SpringClass::Flexion),
    entry(0, -1, SpringClass::Structural),
    entry(0, -2, SpringClass::Flexion),
    entry(0, 1, SpringClass::Structural),
    entry(0, 2, SpringClass::Flexion),
    entry(1, 0, SpringClass::Structural),
    entry(2, 0, SpringClass::Flexion),
    entry(-1, -1, SpringClass::Shear),
    entry(-1, 1, SpringClass::Shear),
    entry(1, 1, SpringClass::Shear),
    entry(1, -1, SpringClass::Shear),
];

/// A resolved spring partner of some particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpringPartner {
    pub coord: GridCoord,
    pub class: SpringClass,
}

impl GridSpec {
    /// In-bounds spring partners of `coord`, in stencil order.
    pub fn spring_partners(&self, coord: GridCoord) -> impl Iterator<Item = SpringPartner> + '_ {
        SPRING_STENCIL.iter().filter_map(move |e| {
            self.offset(coord, e.di, e.dj)
                .map(|partner| SpringPartner { coord: partner, class: e.class })
        })
    }
}

/// Rest length of each spring class for one grid resolution.
///
/// Derived once from the fixed sheet size: structural springs span one
/// grid step, shear springs one diagonal step, flexion springs two steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RestLengths([f32; 3]);

impl RestLengths {
    pub fn for_grid(grid: &GridSpec) -> Self {
        let structural = SHEET_SIZE / (grid.resolution() - 1) as f32;
        let shear = std::f32::consts::SQRT_2 * SHEET_SIZE / (grid.resolution() - 1) as f32;
        Self([structural, shear, 2.0 * structural])
    }

    #[inline]
    pub fn get(&self, class: SpringClass) -> f32 {
        self.0[class.index()]
    }

    pub fn as_array(&self) -> [f32; 3] {
        self.0
    }
}

impl std::ops::Index<SpringClass> for RestLengths {
    type Output = f32;

    fn index(&self, class: SpringClass) -> &f32 {
        &self.0[class.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stencil_matches_classifier() {
        for e in SPRING_STENCIL {
            assert_eq!(SpringClass::from_offset(e.di, e.dj), Some(e.class));
        }
    }

    #[test]
    fn stencil_has_four_of_each() {
        for class in SpringClass::ALL {
            let n = SPRING_STENCIL.iter().filter(|e| e.class == class).count();
            assert_eq!(n, 4, "{} springs", class.name());
        }
    }

    #[test]
    fn offsets_without_springs() {
        assert_eq!(SpringClass::from_offset(0, 0), None);
        assert_eq!(SpringClass::from_offset(2, 1), None);
        assert_eq!(SpringClass::from_offset(2, 2), None);
    }
}
