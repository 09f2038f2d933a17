//! Initial particle layouts.

use weft_math::Vec3;
use weft_types::constants::SHEET_SIZE;

use crate::grid::GridSpec;

/// Generates a flat square sheet in the XY plane at Z = 0.
///
/// The sheet spans `[-2, 2]` in X and Y, centered at the origin. Column `j`
/// maps to X and row `i` maps to Y, so row `R-1` is the top edge:
///
/// ```text
/// x = -2 + 4·j / (R-1)
/// y = -2 + 4·i / (R-1)
/// ```
///
/// # Example
/// ```
/// use weft_mesh::generators::flat_sheet;
/// use weft_mesh::GridSpec;
/// let grid = GridSpec::new(3).unwrap();
/// let positions = flat_sheet(&grid);
/// assert_eq!(positions.len(), 9);
/// assert_eq!(positions[0].x, -2.0);
/// assert_eq!(positions[8].y, 2.0);
/// ```
pub fn flat_sheet(grid: &GridSpec) -> Vec<Vec3> {
    let half = SHEET_SIZE / 2.0;
    let steps = (grid.resolution() - 1) as f32;
    grid.coords()
        .map(|c| {
            Vec3::new(
                -half + SHEET_SIZE * c.j as f32 / steps,
                -half + SHEET_SIZE * c.i as f32 / steps,
                0.0,
            )
        })
        .collect()
}
