//! # Boolean Operations (CSG)
//!
//! Constructive Solid Geometry operations using BSP trees.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//! - Union: A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); A.build(B)
//! - Difference: A.invert(); A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); A.build(B); A.invert()
//! - Intersection: A.invert(); B.clipTo(A); B.invert(); A.clipTo(B); B.clipTo(A); A.build(B); A.invert()
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use solid_mesh::ops::boolean::difference;
//! use solid_mesh::primitives::create_cube;
//!
//! let block = create_cube(DVec3::splat(10.0), true)?;
//! let hole = create_cube(DVec3::new(4.0, 4.0, 20.0), true)?;
//! let result = difference(&block, &hole)?;
//! assert!((result.volume() - 840.0).abs() < 1e-6);
//! # Ok::<(), solid_mesh::MeshError>(())
//! ```

pub mod bsp;
pub mod plane;
pub mod polygon;

#[cfg(test)]
mod tests;

use tracing::trace;

use crate::error::MeshError;
use crate::mesh::Mesh;
use bsp::BspNode;
use polygon::{mesh_to_polygons, polygons_to_mesh};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compute union of two meshes.
pub fn union(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    if a.is_empty() {
        return Ok(b.clone());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }

    let mut bsp_a = BspNode::new(mesh_to_polygons(a));
    let mut bsp_b = BspNode::new(mesh_to_polygons(b));

    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    // Drop B's faces that coincide with A's
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.build(bsp_b.all_polygons());

    finish("union", &bsp_a)
}

/// Compute difference of two meshes (A - B).
pub fn difference(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    if a.is_empty() {
        return Ok(Mesh::new());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }

    let mut bsp_a = BspNode::new(mesh_to_polygons(a));
    let mut bsp_b = BspNode::new(mesh_to_polygons(b));

    // A - B = ~(~A | B)
    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.build(bsp_b.all_polygons());
    bsp_a.invert();

    finish("difference", &bsp_a)
}

/// Compute intersection of two meshes.
pub fn intersection(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    if a.is_empty() || b.is_empty() {
        return Ok(Mesh::new());
    }

    let mut bsp_a = BspNode::new(mesh_to_polygons(a));
    let mut bsp_b = BspNode::new(mesh_to_polygons(b));

    // A & B = ~(~A | ~B)
    bsp_a.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_a.build(bsp_b.all_polygons());
    bsp_a.invert();

    finish("intersection", &bsp_a)
}

/// Union of all meshes, folded left to right.
pub fn union_all(meshes: &[Mesh]) -> Result<Mesh, MeshError> {
    let Some((first, rest)) = meshes.split_first() else {
        return Ok(Mesh::new());
    };
    rest.iter().try_fold(first.clone(), |acc, m| union(&acc, m))
}

/// First mesh minus every following mesh.
pub fn difference_all(meshes: &[Mesh]) -> Result<Mesh, MeshError> {
    let Some((first, rest)) = meshes.split_first() else {
        return Ok(Mesh::new());
    };
    rest.iter().try_fold(first.clone(), |acc, m| difference(&acc, m))
}

/// Intersection of all meshes.
pub fn intersection_all(meshes: &[Mesh]) -> Result<Mesh, MeshError> {
    let Some((first, rest)) = meshes.split_first() else {
        return Ok(Mesh::new());
    };
    rest.iter()
        .try_fold(first.clone(), |acc, m| intersection(&acc, m))
}

fn finish(operation: &str, tree: &BspNode) -> Result<Mesh, MeshError> {
    let mesh = polygons_to_mesh(&tree.all_polygons())?;
    trace!(
        operation,
        depth = tree.depth(),
        polygons = tree.polygon_count(),
        triangles = mesh.triangle_count(),
        "boolean finished"
    );
    Ok(mesh)
}
