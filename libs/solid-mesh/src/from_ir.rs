//! # IR to Mesh Conversion
//!
//! Evaluates a `solid-ir` tree into a single triangle mesh.

use config::constants::{STACK_GROWTH, STACK_RED_ZONE};
use solid_ir::{BooleanOperation, SolidNode};
use tracing::{debug, trace};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::boolean;
use crate::primitives::{create_cube, create_cylinder};

/// Converts a solid tree into a mesh.
///
/// Fails with [`MeshError::DegenerateGeometry`] when a boolean consumes its
/// whole first operand.
///
/// # Example
///
/// ```rust
/// use solid_ir::SolidNode;
/// use solid_mesh::solid_to_mesh;
///
/// let rod = SolidNode::cylinder(10.0, 4.0, 16)?;
/// let mesh = solid_to_mesh(&rod)?;
/// assert_eq!(mesh.triangle_count(), 2 * 16 + 2 * 14);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn solid_to_mesh(node: &SolidNode) -> Result<Mesh, MeshError> {
    let mesh = node_to_mesh(node)?;
    debug!(
        primitives = node.primitive_count(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "solid meshed"
    );
    Ok(mesh)
}

fn node_to_mesh(node: &SolidNode) -> Result<Mesh, MeshError> {
    stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || match node {
        SolidNode::Cube { size, center } => create_cube(*size, *center),

        SolidNode::Cylinder {
            height,
            radius_bottom,
            radius_top,
            center,
            segments,
        } => create_cylinder(*height, *radius_bottom, *radius_top, *center, *segments),

        SolidNode::Transform { matrix, children } => {
            let meshes = children_to_meshes(children)?;
            let mut mesh = boolean::union_all(&meshes)?;
            mesh.transform(matrix);
            Ok(mesh)
        }

        SolidNode::Boolean {
            operation,
            children,
        } => {
            let meshes = children_to_meshes(children)?;
            let result = match operation {
                BooleanOperation::Union => boolean::union_all(&meshes)?,
                BooleanOperation::Difference => boolean::difference_all(&meshes)?,
                BooleanOperation::Intersection => boolean::intersection_all(&meshes)?,
            };
            trace!(%operation, operands = meshes.len(), triangles = result.triangle_count());
            if result.is_empty() {
                return Err(MeshError::degenerate(format!(
                    "{operation} of {} operands produced an empty solid",
                    meshes.len()
                )));
            }
            Ok(result)
        }

        SolidNode::Highlight { child, .. } => node_to_mesh(child),
    })
}

fn children_to_meshes(children: &[SolidNode]) -> Result<Vec<Mesh>, MeshError> {
    children.iter().map(node_to_mesh).collect()
}
