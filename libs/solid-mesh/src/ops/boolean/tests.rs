//! # Boolean Operation Tests

use super::*;
use crate::primitives::create_cylinder;
use crate::primitives::cube::create_cube;
use crate::primitives::cylinder::polygon_area;
use approx::assert_relative_eq;
use glam::{DMat4, DVec3};

/// Creates a centered cube at a specific position.
fn cube_at(pos: DVec3, size: f64) -> Mesh {
    let mut mesh = create_cube(DVec3::splat(size), true).unwrap();
    mesh.transform(&DMat4::from_translation(pos));
    mesh
}

// =============================================================================
// UNION TESTS
// =============================================================================

#[test]
fn test_union_empty_operands() {
    let cube = cube_at(DVec3::ZERO, 1.0);
    assert_eq!(union(&Mesh::new(), &cube).unwrap(), cube);
    assert_eq!(union(&cube, &Mesh::new()).unwrap(), cube);
}

#[test]
fn test_union_non_overlapping() {
    let a = cube_at(DVec3::new(-5.0, 0.0, 0.0), 1.0);
    let b = cube_at(DVec3::new(5.0, 0.0, 0.0), 1.0);

    let result = union(&a, &b).unwrap();

    assert_relative_eq!(result.volume(), 2.0, epsilon = 1e-9);
    let (min, max) = result.bounding_box();
    assert_relative_eq!(min.x, -5.5, epsilon = 1e-9);
    assert_relative_eq!(max.x, 5.5, epsilon = 1e-9);
}

#[test]
fn test_union_overlapping() {
    let a = cube_at(DVec3::ZERO, 1.0);
    let b = cube_at(DVec3::new(0.5, 0.0, 0.0), 1.0);

    let result = union(&a, &b).unwrap();

    assert!(result.validate());
    assert_relative_eq!(result.volume(), 1.5, epsilon = 1e-9);
}

#[test]
fn test_union_touching_faces() {
    let a = cube_at(DVec3::ZERO, 1.0);
    let b = cube_at(DVec3::X, 1.0);

    let result = union(&a, &b).unwrap();

    assert_relative_eq!(result.volume(), 2.0, epsilon = 1e-9);
    let (min, max) = result.bounding_box();
    assert_eq!(min, DVec3::splat(-0.5));
    assert_eq!(max, DVec3::new(1.5, 0.5, 0.5));
}

// =============================================================================
// DIFFERENCE TESTS
// =============================================================================

#[test]
fn test_difference_empty_operands() {
    let cube = cube_at(DVec3::ZERO, 1.0);
    assert!(difference(&Mesh::new(), &cube).unwrap().is_empty());
    assert_eq!(difference(&cube, &Mesh::new()).unwrap(), cube);
}

#[test]
fn test_difference_corner() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::ONE, 1.0);

    let result = difference(&a, &b).unwrap();

    assert!(result.validate());
    assert_relative_eq!(result.volume(), 8.0 - 0.125, epsilon = 1e-9);
    let (min, max) = result.bounding_box();
    assert!(min.abs_diff_eq(DVec3::splat(-1.0), 1e-9));
    assert!(max.abs_diff_eq(DVec3::splat(1.0), 1e-9));
}

#[test]
fn test_difference_non_overlapping_keeps_base() {
    let a = cube_at(DVec3::ZERO, 1.0);
    let b = cube_at(DVec3::splat(10.0), 1.0);

    let result = difference(&a, &b).unwrap();

    assert_relative_eq!(result.volume(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_difference_fully_covered_is_empty() {
    let a = cube_at(DVec3::ZERO, 1.0);
    let b = cube_at(DVec3::ZERO, 3.0);

    let result = difference(&a, &b).unwrap();

    assert!(result.is_empty());
}

#[test]
fn test_difference_through_hole() {
    let block = create_cube(DVec3::splat(10.0), true).unwrap();
    let drill = create_cylinder(20.0, 2.0, 2.0, true, 32).unwrap();

    let result = difference(&block, &drill).unwrap();

    assert_relative_eq!(
        result.volume(),
        1000.0 - polygon_area(2.0, 32) * 10.0,
        max_relative = 1e-9
    );
}

#[test]
fn test_difference_flush_blind_hole() {
    // Hole shares the block's bottom face plane.
    let block = create_cube(DVec3::splat(10.0), false).unwrap();
    let mut pocket = create_cube(DVec3::new(4.0, 4.0, 5.0), false).unwrap();
    pocket.transform(&DMat4::from_translation(DVec3::new(3.0, 3.0, 0.0)));

    let result = difference(&block, &pocket).unwrap();

    assert_relative_eq!(result.volume(), 1000.0 - 80.0, epsilon = 1e-9);
    assert_eq!(result.bounding_box().0.z, 0.0);
}

// =============================================================================
// INTERSECTION TESTS
// =============================================================================

#[test]
fn test_intersection_overlapping() {
    let a = cube_at(DVec3::ZERO, 1.0);
    let b = cube_at(DVec3::new(0.5, 0.0, 0.0), 1.0);

    let result = intersection(&a, &b).unwrap();

    assert_relative_eq!(result.volume(), 0.5, epsilon = 1e-9);
    let (min, max) = result.bounding_box();
    assert_relative_eq!(min.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(max.x, 0.5, epsilon = 1e-9);
}

#[test]
fn test_intersection_disjoint_is_empty() {
    let a = cube_at(DVec3::ZERO, 1.0);
    let b = cube_at(DVec3::splat(5.0), 1.0);

    assert!(intersection(&a, &b).unwrap().is_empty());
    assert!(intersection(&a, &Mesh::new()).unwrap().is_empty());
}

// =============================================================================
// FOLD TESTS
// =============================================================================

#[test]
fn test_fold_helpers() {
    let cubes = [
        cube_at(DVec3::ZERO, 2.0),
        cube_at(DVec3::new(1.0, 1.0, 1.0), 1.0),
        cube_at(DVec3::new(-1.0, -1.0, -1.0), 1.0),
    ];

    assert!(union_all(&[]).unwrap().is_empty());
    assert_relative_eq!(
        difference_all(&cubes).unwrap().volume(),
        8.0 - 0.25,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        union_all(&cubes).unwrap().volume(),
        8.0 + 2.0 * 0.875,
        epsilon = 1e-9
    );
    assert!(intersection_all(&cubes).unwrap().is_empty());
}

#[test]
fn test_boolean_is_deterministic() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = create_cylinder(4.0, 0.5, 0.5, true, 16).unwrap();
    assert_eq!(difference(&a, &b).unwrap(), difference(&a, &b).unwrap());
}
