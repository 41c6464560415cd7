//! # Cylinder Primitive
//!
//! Generates mesh for cylinder and cone shapes.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MIN_FACETS;
use glam::DVec3;
use std::f64::consts::TAU;

/// Creates a cylinder or cone mesh around the Z axis.
///
/// The first ring vertex sits on +X; rings advance counter-clockwise seen
/// from +Z.
///
/// # Arguments
///
/// * `height` - Height along Z axis
/// * `radius_bottom` - Radius at the base
/// * `radius_top` - Radius at the top
/// * `center` - If true, center vertically at origin
/// * `segments` - Number of facets around the circumference
///
/// # Example
///
/// ```rust
/// use solid_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(15.0, 10.0, 10.0, false, 32).unwrap();
/// assert_eq!(mesh.vertex_count(), 64);
///
/// let cone = create_cylinder(10.0, 5.0, 0.0, false, 32).unwrap();
/// assert_eq!(cone.vertex_count(), 33);
/// ```
pub fn create_cylinder(
    height: f64,
    radius_bottom: f64,
    radius_top: f64,
    center: bool,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cylinder height must be positive: {height}"
        )));
    }
    if radius_bottom < 0.0 || radius_top < 0.0 || (radius_bottom == 0.0 && radius_top == 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder radii must be non-negative with one positive: r1={radius_bottom}, r2={radius_top}"
        )));
    }
    if segments < MIN_FACETS {
        return Err(MeshError::degenerate(format!(
            "Cylinder needs at least {MIN_FACETS} segments: {segments}"
        )));
    }

    let (z_bottom, z_top) = if center {
        (-height / 2.0, height / 2.0)
    } else {
        (0.0, height)
    };

    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * n, 4 * n);
    let bottom = add_ring(&mut mesh, radius_bottom, z_bottom, segments);
    let top = add_ring(&mut mesh, radius_top, z_top, segments);

    // Side wall
    for j in 0..n {
        let k = (j + 1) % n;
        match (bottom.len(), top.len()) {
            (1, _) => mesh.add_triangle(bottom[0], top[k], top[j]),
            (_, 1) => mesh.add_triangle(bottom[j], bottom[k], top[0]),
            _ => {
                mesh.add_triangle(bottom[j], bottom[k], top[k]);
                mesh.add_triangle(bottom[j], top[k], top[j]);
            }
        }
    }

    // Caps, fanned from the first ring vertex
    if bottom.len() > 1 {
        for j in 1..n - 1 {
            mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j]);
        }
    }
    if top.len() > 1 {
        for j in 1..n - 1 {
            mesh.add_triangle(top[0], top[j], top[j + 1]);
        }
    }

    Ok(mesh)
}

/// Adds a ring of vertices, or a single apex when the radius is zero.
fn add_ring(mesh: &mut Mesh, radius: f64, z: f64, segments: u32) -> Vec<u32> {
    if radius == 0.0 {
        return vec![mesh.add_vertex(DVec3::new(0.0, 0.0, z))];
    }
    (0..segments)
        .map(|j| {
            let (sin, cos) = (TAU * j as f64 / segments as f64).sin_cos();
            mesh.add_vertex(DVec3::new(radius * cos, radius * sin, z))
        })
        .collect()
}

/// Area of the regular polygon used to approximate a circle.
///
/// # Example
///
/// ```rust
/// use solid_mesh::primitives::cylinder::polygon_area;
///
/// // A square inscribed in a unit circle
/// assert!((polygon_area(1.0, 4) - 2.0).abs() < 1e-12);
/// ```
pub fn polygon_area(radius: f64, segments: u32) -> f64 {
    let n = segments as f64;
    0.5 * n * radius * radius * (TAU / n).sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cylinder_basic() {
        let mesh = create_cylinder(10.0, 5.0, 5.0, false, 32).unwrap();
        assert!(mesh.validate());
        assert!(mesh.is_closed());
        assert_eq!(mesh.triangle_count(), 2 * 32 + 2 * 30);
    }

    #[test]
    fn test_cylinder_volume_matches_prism() {
        let mesh = create_cylinder(15.0, 10.0, 10.0, false, 64).unwrap();
        assert_relative_eq!(
            mesh.volume(),
            polygon_area(10.0, 64) * 15.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_cylinder_extent_on_quarter_facets() {
        let mesh = create_cylinder(4.0, 9.75, 9.75, false, 64).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(max.x - min.x, 19.5, epsilon = 1e-12);
        assert_relative_eq!(max.y - min.y, 19.5, epsilon = 1e-12);
        assert_eq!(min.z, 0.0);
        assert_eq!(max.z, 4.0);
    }

    #[test]
    fn test_cylinder_centered() {
        let mesh = create_cylinder(10.0, 5.0, 5.0, true, 32).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min.z, -5.0);
        assert_eq!(max.z, 5.0);
    }

    #[test]
    fn test_cones_are_closed() {
        for (r1, r2) in [(5.0, 0.0), (0.0, 5.0)] {
            let mesh = create_cylinder(10.0, r1, r2, false, 16).unwrap();
            assert!(mesh.validate());
            assert!(mesh.is_closed());
            assert_relative_eq!(
                mesh.volume(),
                polygon_area(5.0, 16) * 10.0 / 3.0,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_cylinder_invalid_inputs() {
        assert!(create_cylinder(0.0, 5.0, 5.0, false, 32).is_err());
        assert!(create_cylinder(10.0, 0.0, 0.0, false, 32).is_err());
        assert!(create_cylinder(10.0, -1.0, 5.0, false, 32).is_err());
        assert!(create_cylinder(10.0, 5.0, 5.0, false, 2).is_err());
    }
}
