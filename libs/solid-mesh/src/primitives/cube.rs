//! # Cube Primitive
//!
//! Generates mesh for rectangular blocks.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Corner index triples, two per face, wound counter-clockwise from outside.
///
/// Corners are numbered bottom ring 0..4 then top ring 4..8, each ring
/// ordered (min,min), (max,min), (max,max), (min,max) in XY.
const FACES: [[u32; 3]; 12] = [
    // bottom (z = min)
    [0, 2, 1],
    [0, 3, 2],
    // top (z = max)
    [4, 5, 6],
    [4, 6, 7],
    // front (y = min)
    [0, 1, 5],
    [0, 5, 4],
    // back (y = max)
    [2, 3, 7],
    [2, 7, 6],
    // left (x = min)
    [3, 0, 4],
    [3, 4, 7],
    // right (x = max)
    [1, 2, 6],
    [1, 6, 5],
];

/// Creates a rectangular block mesh.
///
/// # Arguments
///
/// * `size` - Dimensions [x, y, z]
/// * `center` - If true, center at origin; if false, corner at origin
///
/// # Example
///
/// ```rust
/// use solid_mesh::primitives::create_cube;
/// use glam::DVec3;
///
/// let mesh = create_cube(DVec3::new(45.3, 45.3, 12.0), false).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cube(size: DVec3, center: bool) -> Result<Mesh, MeshError> {
    if size.min_element() <= 0.0 || !size.is_finite() {
        return Err(MeshError::degenerate(format!(
            "Cube size must be positive: {size:?}"
        )));
    }

    let (min, max) = if center {
        (-size / 2.0, size / 2.0)
    } else {
        (DVec3::ZERO, size)
    };

    let mut mesh = Mesh::with_capacity(8, FACES.len());
    for z in [min.z, max.z] {
        mesh.add_vertex(DVec3::new(min.x, min.y, z));
        mesh.add_vertex(DVec3::new(max.x, min.y, z));
        mesh.add_vertex(DVec3::new(max.x, max.y, z));
        mesh.add_vertex(DVec3::new(min.x, max.y, z));
    }
    for [a, b, c] in FACES {
        mesh.add_triangle(a, b, c);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_not_centered() {
        let mesh = create_cube(DVec3::new(10.0, 20.0, 30.0), false).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_cube_centered() {
        let mesh = create_cube(DVec3::splat(10.0), true).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::splat(-5.0));
        assert_eq!(max, DVec3::splat(5.0));
    }

    #[test]
    fn test_cube_is_closed_and_outward() {
        let mesh = create_cube(DVec3::new(2.0, 3.0, 4.0), false).unwrap();
        assert!(mesh.validate());
        assert!(mesh.is_closed());
        assert_relative_eq!(mesh.volume(), 24.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cube_invalid_size() {
        assert!(create_cube(DVec3::new(0.0, 10.0, 10.0), false).is_err());
        assert!(create_cube(DVec3::new(-5.0, 10.0, 10.0), false).is_err());
    }
}
