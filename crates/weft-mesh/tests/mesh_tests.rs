//! Integration tests for weft-mesh.

use weft_math::Vec3;
use weft_mesh::generators::flat_sheet;
use weft_mesh::normals::{particle_normal, recompute_normals};
use weft_mesh::springs::SPRING_STENCIL;
use weft_mesh::{ClothTopology, GridSpec, RestLengths, SpringClass};
use weft_types::{GridCoord, WeftError};

fn sheet(r: usize) -> (GridSpec, Vec<Vec3>) {
    let grid = GridSpec::new(r).unwrap();
    let positions = flat_sheet(&grid);
    (grid, positions)
}

// ─── Grid Tests ───────────────────────────────────────────────

#[test]
fn resolution_one_is_configuration_error() {
    let err = GridSpec::new(1).unwrap_err();
    assert!(matches!(err, WeftError::ConfigurationError(_)));
}

#[test]
fn deserialized_grid_is_validated() {
    assert!(serde_json::from_str::<GridSpec>("0").is_err());
    assert!(serde_json::from_str::<GridSpec>("1").is_err());

    let grid: GridSpec = serde_json::from_str("4").unwrap();
    assert_eq!(grid, GridSpec::new(4).unwrap());
    assert_eq!(serde_json::to_string(&grid).unwrap(), "4");
}

#[test]
fn particle_count_is_r_squared() {
    for r in 2..12 {
        let grid = GridSpec::new(r).unwrap();
        assert_eq!(grid.particle_count(), r * r);
        assert_eq!(flat_sheet(&grid).len(), r * r);
    }
}

#[test]
fn checked_index_rejects_outside() {
    let grid = GridSpec::new(3).unwrap();
    assert_eq!(grid.checked_index(2, 2).unwrap(), 8);
    assert!(matches!(
        grid.checked_index(3, 0),
        Err(WeftError::InvalidCoordinate { i: 3, j: 0, resolution: 3 })
    ));
}

// ─── Spring Stencil Tests ─────────────────────────────────────

#[test]
fn rest_length_ratios() {
    for r in [2, 3, 7, 20, 64] {
        let grid = GridSpec::new(r).unwrap();
        let rest = RestLengths::for_grid(&grid);
        let s = rest[SpringClass::Structural];
        assert!((s - 4.0 / (r - 1) as f32).abs() < 1e-6);
        assert!((rest[SpringClass::Flexion] - 2.0 * s).abs() < 1e-6);
        assert!((rest[SpringClass::Shear] - std::f32::consts::SQRT_2 * s).abs() < 1e-5);
    }
}

#[test]
fn interior_particle_has_twelve_partners() {
    let grid = GridSpec::new(5).unwrap();
    let partners: Vec<_> = grid.spring_partners(GridCoord::new(2, 2)).collect();
    assert_eq!(partners.len(), 12);
}

#[test]
fn corner_partner_counts() {
    let grid = GridSpec::new(5).unwrap();
    // Corner: 2 structural, 2 flexion, 1 shear.
    let partners: Vec<_> = grid.spring_partners(GridCoord::new(0, 0)).collect();
    assert_eq!(partners.len(), 5);
    let count = |class| partners.iter().filter(|p| p.class == class).count();
    assert_eq!(count(SpringClass::Structural), 2);
    assert_eq!(count(SpringClass::Flexion), 2);
    assert_eq!(count(SpringClass::Shear), 1);
}

#[test]
fn smallest_grid_has_no_flexion() {
    let grid = GridSpec::new(2).unwrap();
    for c in grid.coords() {
        assert!(grid.spring_partners(c).all(|p| p.class != SpringClass::Flexion));
        assert_eq!(grid.spring_partners(c).count(), 3);
    }
}

#[test]
fn partner_classes_match_offsets() {
    let grid = GridSpec::new(6).unwrap();
    for c in grid.coords() {
        for p in grid.spring_partners(c) {
            let di = p.coord.i as isize - c.i as isize;
            let dj = p.coord.j as isize - c.j as isize;
            assert_eq!(SpringClass::from_offset(di, dj), Some(p.class));
        }
    }
}

#[test]
fn springs_are_symmetric() {
    let grid = GridSpec::new(5).unwrap();
    for c in grid.coords() {
        for p in grid.spring_partners(c) {
            assert!(grid.spring_partners(p.coord).any(|q| q.coord == c && q.class == p.class));
        }
    }
    assert_eq!(SPRING_STENCIL.len(), 12);
}

#[test]
fn flat_sheet_partners_sit_at_rest_length() {
    let (grid, positions) = sheet(6);
    let rest = RestLengths::for_grid(&grid);
    for c in grid.coords() {
        let p = positions[grid.index(c.i, c.j)];
        for partner in grid.spring_partners(c) {
            let q = positions[grid.index(partner.coord.i, partner.coord.j)];
            assert!(((p - q).length() - rest[partner.class]).abs() < 1e-5);
        }
    }
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn flat_sheet_extent() {
    let (grid, positions) = sheet(5);
    assert_eq!(positions[grid.index(0, 0)], Vec3::new(-2.0, -2.0, 0.0));
    assert_eq!(positions[grid.index(4, 4)], Vec3::new(2.0, 2.0, 0.0));
    assert_eq!(positions[grid.index(0, 4)], Vec3::new(2.0, -2.0, 0.0));
    assert!(positions.iter().all(|p| p.z == 0.0));
}

// ─── Topology Tests ───────────────────────────────────────────

#[test]
fn triangle_count() {
    for r in 2..10 {
        let grid = GridSpec::new(r).unwrap();
        let topo = ClothTopology::build(&grid);
        assert_eq!(topo.triangle_count(), (r - 1) * (r - 1) * 2);
        assert_eq!(topo.triangles.len(), (r - 1) * (r - 1) * 6);
    }
}

#[test]
fn wire_edge_count() {
    // Horizontal + vertical + one diagonal per cell.
    let grid = GridSpec::new(4).unwrap();
    let topo = ClothTopology::build(&grid);
    assert_eq!(topo.edge_count(), 4 * 3 + 4 * 3 + 3 * 3);
    assert_eq!(topo.edge(0), [0, 1]);
    assert_eq!(topo.edge(1), [0, 4]);
    assert_eq!(topo.edge(2), [0, 5]);
}

#[test]
fn first_cell_layout() {
    let grid = GridSpec::new(3).unwrap();
    let topo = ClothTopology::build(&grid);
    assert_eq!(topo.triangle(0), [0, 1, 4]);
    assert_eq!(topo.triangle(1), [0, 4, 3]);
}

#[test]
fn indices_in_range() {
    let grid = GridSpec::new(7).unwrap();
    let topo = ClothTopology::build(&grid);
    let n = grid.particle_count() as u32;
    assert!(topo.triangles.iter().all(|&i| i < n));
    assert!(topo.wire.iter().all(|&i| i < n));
}

#[test]
fn winding_faces_positive_z() {
    let (grid, positions) = sheet(4);
    let topo = ClothTopology::build(&grid);
    for t in 0..topo.triangle_count() {
        let [a, b, c] = topo.triangle(t).map(|v| positions[v as usize]);
        assert!((b - a).cross(c - a).z > 0.0, "triangle {t} is wound clockwise");
    }
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn flat_sheet_normals_face_positive_z() {
    let (grid, positions) = sheet(5);
    let mut normals = vec![Vec3::ZERO; grid.particle_count()];
    recompute_normals(&grid, &positions, &mut normals).unwrap();
    for n in &normals {
        assert!((*n - Vec3::Z).length() < 1e-6);
    }
}

#[test]
fn normals_are_unit_length_when_curved() {
    for r in [2, 3, 8] {
        let (grid, mut positions) = sheet(r);
        for (id, p) in positions.iter_mut().enumerate() {
            p.z = 0.3 * (p.x * 1.3).sin() + 0.2 * (p.y * 0.7 + id as f32 * 0.01).cos();
        }
        let mut normals = vec![Vec3::ZERO; grid.particle_count()];
        recompute_normals(&grid, &positions, &mut normals).unwrap();
        for (id, n) in normals.iter().enumerate() {
            assert!((n.length() - 1.0).abs() < 1e-5, "normal {id} has length {}", n.length());
        }
    }
}

#[test]
fn corner_uses_single_triangle() {
    // (0, R-1) only has the ring pair (1,0) -> (0,-1) in bounds.
    let (grid, mut positions) = sheet(3);
    positions[grid.index(1, 2)].z = 1.0;
    let n = particle_normal(&grid, &positions, GridCoord::new(0, 2)).unwrap();
    let p0 = positions[grid.index(0, 2)];
    let e1 = positions[grid.index(1, 2)] - p0;
    let e2 = positions[grid.index(0, 1)] - p0;
    let expected = e1.cross(e2).normalize();
    assert!((n - expected).length() < 1e-6);
}

#[test]
fn normals_idempotent() {
    let (grid, mut positions) = sheet(6);
    positions[grid.index(3, 2)].z = 0.5;
    let mut first = vec![Vec3::ZERO; grid.particle_count()];
    let mut second = vec![Vec3::ZERO; grid.particle_count()];
    recompute_normals(&grid, &positions, &mut first).unwrap();
    recompute_normals(&grid, &positions, &mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn collapsed_triangle_is_degenerate() {
    let (grid, mut positions) = sheet(3);
    // Collapse the right neighbour of (0, 0) onto it.
    positions[grid.index(0, 1)] = positions[grid.index(0, 0)];
    let mut normals = vec![Vec3::ZERO; grid.particle_count()];
    let err = recompute_normals(&grid, &positions, &mut normals).unwrap_err();
    assert!(matches!(err, WeftError::NumericalDegeneracy(_)));
}

#[test]
fn mismatched_buffers_rejected() {
    let (grid, positions) = sheet(3);
    let mut normals = vec![Vec3::ZERO; 4];
    assert!(recompute_normals(&grid, &positions, &mut normals).is_err());
}
