//! # Polygon for BSP Operations
//!
//! Convex planar polygon with plane splitting, plus conversion between
//! meshes and polygon soups.

use std::collections::HashMap;

use config::constants::{COORDINATE_SCALE, MAX_TRIANGLES, MAX_VERTICES, MIN_TRIANGLE_AREA};
use glam::DVec3;

use super::plane::{Classification, Plane};
use crate::error::MeshError;
use crate::mesh::Mesh;

// =============================================================================
// POLYGON
// =============================================================================

/// A convex polygon with its supporting plane.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Vertices in counter-clockwise order seen from the front.
    vertices: Vec<DVec3>,
    plane: Plane,
}

/// Output buckets filled by [`Polygon::split`].
#[derive(Debug, Default)]
pub struct Split {
    /// Coplanar polygons facing the same way as the splitting plane.
    pub coplanar_front: Vec<Polygon>,
    /// Coplanar polygons facing away from the splitting plane.
    pub coplanar_back: Vec<Polygon>,
    /// Polygons (or pieces) in front of the plane.
    pub front: Vec<Polygon>,
    /// Polygons (or pieces) behind the plane.
    pub back: Vec<Polygon>,
}

impl Polygon {
    /// Create polygon from vertices, deriving the plane from the first three.
    ///
    /// Returns `None` for fewer than three vertices or a degenerate start.
    pub fn new(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    /// Polygon vertices.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Supporting plane.
    pub fn plane(&self) -> Plane {
        self.plane
    }

    /// Reverse winding and plane.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }

    /// Classify this polygon relative to a plane.
    pub fn classify(&self, plane: &Plane) -> Classification {
        let mut front = false;
        let mut back = false;
        for &v in &self.vertices {
            match plane.classify_point(v) {
                Classification::Front => front = true,
                Classification::Back => back = true,
                _ => {}
            }
        }
        match (front, back) {
            (true, true) => Classification::Spanning,
            (true, false) => Classification::Front,
            (false, true) => Classification::Back,
            (false, false) => Classification::Coplanar,
        }
    }

    /// Sort this polygon into `out` by its position relative to `plane`,
    /// cutting it in two when it spans the plane.
    ///
    /// Pieces keep the parent's plane so later classification never drifts.
    pub fn split(self, plane: &Plane, out: &mut Split) {
        match self.classify(plane) {
            Classification::Coplanar => {
                if self.plane.normal().dot(plane.normal()) > 0.0 {
                    out.coplanar_front.push(self);
                } else {
                    out.coplanar_back.push(self);
                }
            }
            Classification::Front => out.front.push(self),
            Classification::Back => out.back.push(self),
            Classification::Spanning => {
                let n = self.vertices.len();
                let mut front_verts = Vec::with_capacity(n + 1);
                let mut back_verts = Vec::with_capacity(n + 1);

                for i in 0..n {
                    let vi = self.vertices[i];
                    let vj = self.vertices[(i + 1) % n];
                    let ti = plane.classify_point(vi);
                    let tj = plane.classify_point(vj);

                    if ti != Classification::Back {
                        front_verts.push(vi);
                    }
                    if ti != Classification::Front {
                        back_verts.push(vi);
                    }

                    let crosses = matches!(
                        (ti, tj),
                        (Classification::Front, Classification::Back)
                            | (Classification::Back, Classification::Front)
                    );
                    if crosses {
                        let di = plane.signed_distance(vi);
                        let dj = plane.signed_distance(vj);
                        let cut = vi.lerp(vj, di / (di - dj));
                        front_verts.push(cut);
                        back_verts.push(cut);
                    }
                }

                if front_verts.len() >= 3 {
                    out.front.push(Polygon {
                        vertices: front_verts,
                        plane: self.plane,
                    });
                }
                if back_verts.len() >= 3 {
                    out.back.push(Polygon {
                        vertices: back_verts,
                        plane: self.plane,
                    });
                }
            }
        }
    }
}

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

/// Convert mesh triangles to polygons, dropping degenerate triangles.
pub fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    (0..mesh.triangle_count())
        .filter_map(|i| Polygon::new(mesh.triangle_corners(i).to_vec()))
        .collect()
}

/// Convert polygons back to a mesh.
///
/// Coincident vertices are welded on a `1 / COORDINATE_SCALE` grid and each
/// polygon is fan triangulated. Triangles that collapse during welding are
/// dropped.
pub fn polygons_to_mesh(polygons: &[Polygon]) -> Result<Mesh, MeshError> {
    let mut mesh = Mesh::new();
    let mut welded: HashMap<[i64; 3], u32> = HashMap::new();

    let mut index_of = |mesh: &mut Mesh, v: DVec3| -> u32 {
        let key = [
            (v.x * COORDINATE_SCALE).round() as i64,
            (v.y * COORDINATE_SCALE).round() as i64,
            (v.z * COORDINATE_SCALE).round() as i64,
        ];
        *welded.entry(key).or_insert_with(|| mesh.add_vertex(v))
    };

    for poly in polygons {
        let indices: Vec<u32> = poly
            .vertices()
            .iter()
            .map(|&v| index_of(&mut mesh, v))
            .collect();

        for i in 1..indices.len() - 1 {
            let tri = [indices[0], indices[i], indices[i + 1]];
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                continue;
            }
            let [a, b, c] = tri.map(|idx| mesh.vertices()[idx as usize]);
            if (b - a).cross(c - a).length() / 2.0 < MIN_TRIANGLE_AREA {
                continue;
            }
            mesh.add_triangle(tri[0], tri[1], tri[2]);
        }

        if mesh.vertex_count() > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: mesh.vertex_count(),
                max: MAX_VERTICES,
            });
        }
        if mesh.triangle_count() > MAX_TRIANGLES {
            return Err(MeshError::TooManyTriangles {
                count: mesh.triangle_count(),
                max: MAX_TRIANGLES,
            });
        }
    }

    Ok(mesh)
}

// =============================================================================
// TESTS
// =============================================================================
