//! # Mesh Data Structure
//!
//! Indexed triangle mesh produced by the kernel.

use config::constants::MIN_TRIANGLE_AREA;
use glam::{DMat4, DVec3};
use std::collections::HashMap;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64. Conversion to f32 only happens in the
/// export buffers.
///
/// # Example
///
/// ```rust
/// use solid_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// let c = mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(a, b, c);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices, counter-clockwise seen from outside
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the triangle indices.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the three corners of a triangle.
    #[inline]
    pub fn triangle_corners(&self, index: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangles[index];
        [
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        ]
    }

    /// Computes the axis-aligned bounding box as (min, max).
    ///
    /// Only vertices referenced by a triangle are considered.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let mut corners = self
            .triangles
            .iter()
            .flatten()
            .map(|&i| self.vertices[i as usize]);

        let Some(first) = corners.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        corners.fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
    }

    /// Enclosed volume via signed tetrahedra against the origin.
    ///
    /// Positive for closed meshes with outward-facing triangles.
    pub fn volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|&[a, b, c]| {
                let (a, b, c) = (
                    self.vertices[a as usize],
                    self.vertices[b as usize],
                    self.vertices[c as usize],
                );
                a.dot(b.cross(c))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Transforms all vertices by a 4x4 matrix.
    ///
    /// Mirroring transforms reverse the winding so triangles keep facing out.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
        if matrix.determinant() < 0.0 {
            for tri in &mut self.triangles {
                tri.swap(1, 2);
            }
        }
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex
    /// - No zero-area triangles
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.triangles.iter().enumerate().all(|(i, tri)| {
            if tri.iter().any(|&idx| idx >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let [a, b, c] = self.triangle_corners(i);
            (b - a).cross(c - a).length() / 2.0 >= MIN_TRIANGLE_AREA
        })
    }

    /// Returns true when every directed edge is matched by its reverse.
    ///
    /// Holds for watertight primitives. Boolean results may contain
    /// T-junctions and fail this check while still enclosing a valid volume.
    pub fn is_closed(&self) -> bool {
        let mut edges: HashMap<(u32, u32), i32> = HashMap::new();
        for &[a, b, c] in &self.triangles {
            for (from, to) in [(a, b), (b, c), (c, a)] {
                let (key, delta) = if from < to { ((from, to), 1) } else { ((to, from), -1) };
                *edges.entry(key).or_insert(0) += delta;
            }
        }
        edges.values().all(|&balance| balance == 0)
    }

    /// Exports vertices as a flat f32 array `[x, y, z, x, y, z, ...]`.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices as a flat u32 array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_tetrahedron() -> Mesh {
        let mut mesh = Mesh::new();
        let o = mesh.add_vertex(DVec3::ZERO);
        let x = mesh.add_vertex(DVec3::X);
        let y = mesh.add_vertex(DVec3::Y);
        let z = mesh.add_vertex(DVec3::Z);
        mesh.add_triangle(o, y, x);
        mesh.add_triangle(o, x, z);
        mesh.add_triangle(o, z, y);
        mesh.add_triangle(x, y, z);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.bounding_box(), (DVec3::ZERO, DVec3::ZERO));
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = unit_tetrahedron();
        mesh.transform(&DMat4::from_translation(DVec3::new(-1.0, 2.0, 0.5)));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, 2.0, 0.5));
        assert_eq!(max, DVec3::new(0.0, 3.0, 1.5));
    }

    #[test]
    fn test_bounding_box_ignores_unreferenced_vertices() {
        let mut mesh = unit_tetrahedron();
        mesh.add_vertex(DVec3::splat(100.0));
        assert_eq!(mesh.bounding_box().1, DVec3::ONE);
    }

    #[test]
    fn test_mesh_volume() {
        let mesh = unit_tetrahedron();
        assert_relative_eq!(mesh.volume(), 1.0 / 6.0, epsilon = 1e-12);
        assert!(mesh.is_closed());
        assert!(mesh.validate());
    }

    #[test]
    fn test_mirror_transform_keeps_volume_positive() {
        let mut mesh = unit_tetrahedron();
        mesh.transform(&DMat4::from_scale(DVec3::new(-1.0, 1.0, 1.0)));
        assert_relative_eq!(mesh.volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_open_mesh_is_not_closed() {
        let mut mesh = unit_tetrahedron();
        mesh.triangles.pop();
        assert!(!mesh.is_closed());
    }

    #[test]
    fn test_export_buffers() {
        let mesh = unit_tetrahedron();
        assert_eq!(mesh.vertices_f32().len(), 12);
        assert_eq!(mesh.indices_u32().len(), 12);
        assert_eq!(&mesh.vertices_f32()[3..6], &[1.0, 0.0, 0.0]);
    }
}
