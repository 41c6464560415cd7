//! Geometry nodes produced by the part recipes.
//!
//! Primitives are validated when constructed so a tree that exists is always
//! meshable. Transforms and booleans are plain wrappers around children.

use config::constants::{EPSILON, MIN_FACETS};
use glam::{DMat4, DVec3, DVec4};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::IrError;

// =============================================================================
// BOOLEAN OPERATION
// =============================================================================

/// Boolean combination applied to the children of a [`SolidNode::Boolean`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanOperation {
    /// Volume covered by any child.
    Union,
    /// First child with every following child carved out.
    Difference,
    /// Volume covered by every child.
    Intersection,
}

impl fmt::Display for BooleanOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BooleanOperation::Union => "union",
            BooleanOperation::Difference => "difference",
            BooleanOperation::Intersection => "intersection",
        };
        f.write_str(name)
    }
}

// =============================================================================
// SOLID NODE
// =============================================================================

/// A node in the solid geometry tree.
///
/// All values are concrete millimetre dimensions.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use solid_ir::SolidNode;
/// let node = SolidNode::cube(DVec3::splat(1.0), false).unwrap();
/// assert_eq!(node.primitive_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SolidNode {
    /// Axis-aligned box. Corner at the origin unless centered.
    Cube {
        /// Size as [x, y, z].
        size: DVec3,
        /// Whether centered at origin.
        center: bool,
    },

    /// Cylinder or frustum along +Z.
    Cylinder {
        /// Height along Z.
        height: f64,
        /// Radius at the base.
        radius_bottom: f64,
        /// Radius at the top.
        radius_top: f64,
        /// Whether centered vertically at origin.
        center: bool,
        /// Facets approximating the circle.
        segments: u32,
    },

    /// Affine transform applied to the union of the children.
    Transform {
        /// Column-major transform matrix.
        matrix: DMat4,
        /// Transformed geometry.
        children: Vec<SolidNode>,
    },

    /// Boolean combination of the children.
    Boolean {
        /// Operation to apply.
        operation: BooleanOperation,
        /// Operands, in order.
        children: Vec<SolidNode>,
    },

    /// Preview-only marker. Carries no geometric effect.
    Highlight {
        /// RGBA preview colour.
        color: [f32; 4],
        /// Highlighted geometry.
        child: Box<SolidNode>,
    },
}

impl SolidNode {
    // =========================================================================
    // PRIMITIVES
    // =========================================================================

    /// Constructs a cube node while validating all sides exceed the tolerance.
    pub fn cube(size: DVec3, center: bool) -> Result<Self, IrError> {
        if !size.is_finite() || size.min_element() <= EPSILON {
            return Err(IrError::CubeTooSmall { size });
        }
        Ok(Self::Cube { size, center })
    }

    /// Constructs an uncentered cylinder from its diameter.
    ///
    /// # Examples
    /// ```
    /// use solid_ir::SolidNode;
    /// let bore = SolidNode::cylinder(6.5, 9.5, 64).unwrap();
    /// assert!(matches!(bore, SolidNode::Cylinder { radius_top, .. } if radius_top == 4.75));
    /// ```
    pub fn cylinder(height: f64, diameter: f64, segments: u32) -> Result<Self, IrError> {
        let radius = diameter / 2.0;
        Self::frustum(height, radius, radius, false, segments)
    }

    /// Constructs a cylinder or cone with independent end radii.
    pub fn frustum(
        height: f64,
        radius_bottom: f64,
        radius_top: f64,
        center: bool,
        segments: u32,
    ) -> Result<Self, IrError> {
        if !height.is_finite() || height <= EPSILON {
            return Err(IrError::CylinderHeight { height });
        }
        let radii_valid = radius_bottom.is_finite()
            && radius_top.is_finite()
            && radius_bottom >= 0.0
            && radius_top >= 0.0
            && radius_bottom.max(radius_top) > EPSILON;
        if !radii_valid {
            return Err(IrError::CylinderRadius {
                radius_bottom,
                radius_top,
            });
        }
        if segments < MIN_FACETS {
            return Err(IrError::TooFewSegments {
                segments,
                min: MIN_FACETS,
            });
        }
        Ok(Self::Cylinder {
            height,
            radius_bottom,
            radius_top,
            center,
            segments,
        })
    }

    // =========================================================================
    // BOOLEANS
    // =========================================================================

    /// Unions the children.
    pub fn union(children: Vec<SolidNode>) -> Result<Self, IrError> {
        Self::boolean(BooleanOperation::Union, children)
    }

    /// Subtracts every following child from the first.
    pub fn difference(children: Vec<SolidNode>) -> Result<Self, IrError> {
        Self::boolean(BooleanOperation::Difference, children)
    }

    /// Intersects the children.
    pub fn intersection(children: Vec<SolidNode>) -> Result<Self, IrError> {
        Self::boolean(BooleanOperation::Intersection, children)
    }

    fn boolean(operation: BooleanOperation, children: Vec<SolidNode>) -> Result<Self, IrError> {
        if children.is_empty() {
            return Err(IrError::EmptyBoolean { operation });
        }
        Ok(Self::Boolean {
            operation,
            children,
        })
    }

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Wraps the node in an arbitrary affine transform.
    pub fn transformed(self, matrix: DMat4) -> Self {
        Self::Transform {
            matrix,
            children: vec![self],
        }
    }

    /// Moves the node by `offset`.
    pub fn translate(self, offset: DVec3) -> Self {
        self.transformed(DMat4::from_translation(offset))
    }

    /// Rotates the node by Euler angles in degrees, applied X, then Y, then Z.
    ///
    /// Quarter turns produce exact matrices so axis-aligned faces stay
    /// axis-aligned.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec3;
    /// use solid_ir::SolidNode;
    /// let node = SolidNode::cube(DVec3::ONE, false).unwrap()
    ///     .rotate_degrees(DVec3::new(90.0, 0.0, 90.0));
    /// if let SolidNode::Transform { matrix, .. } = node {
    ///     assert_eq!(matrix.transform_point3(DVec3::Z), DVec3::X);
    /// }
    /// ```
    pub fn rotate_degrees(self, angles: DVec3) -> Self {
        self.transformed(rotation_matrix(angles))
    }

    /// Marks the node as preview-only highlighted geometry.
    pub fn highlight(self, color: [f32; 4]) -> Self {
        Self::Highlight {
            color,
            child: Box::new(self),
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Counts the primitive leaves in the tree.
    pub fn primitive_count(&self) -> usize {
        match self {
            SolidNode::Cube { .. } | SolidNode::Cylinder { .. } => 1,
            SolidNode::Transform { children, .. } | SolidNode::Boolean { children, .. } => {
                children.iter().map(SolidNode::primitive_count).sum()
            }
            SolidNode::Highlight { child, .. } => child.primitive_count(),
        }
    }

    /// Returns every highlighted subtree, outermost first.
    pub fn highlighted(&self) -> Vec<&SolidNode> {
        let mut found = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                SolidNode::Highlight { .. } => found.push(node),
                SolidNode::Transform { children, .. } | SolidNode::Boolean { children, .. } => {
                    stack.extend(children.iter().rev());
                }
                SolidNode::Cube { .. } | SolidNode::Cylinder { .. } => {}
            }
        }
        found
    }
}

// =============================================================================
// ROTATION HELPERS
// =============================================================================

/// Builds `Rz * Ry * Rx` from Euler angles in degrees.
///
/// Multiples of 90° use exact sines and cosines so quarter turns map axes
/// onto axes without rounding; any other angle goes through glam.
pub fn rotation_matrix(angles: DVec3) -> DMat4 {
    rotation_z(angles.z) * rotation_y(angles.y) * rotation_x(angles.x)
}

fn rotation_x(degrees: f64) -> DMat4 {
    let Some((s, c)) = quarter_turn(degrees) else {
        return DMat4::from_rotation_x(degrees.to_radians());
    };
    DMat4::from_cols(
        DVec4::X,
        DVec4::new(0.0, c, s, 0.0),
        DVec4::new(0.0, -s, c, 0.0),
        DVec4::W,
    )
}

fn rotation_y(degrees: f64) -> DMat4 {
    let Some((s, c)) = quarter_turn(degrees) else {
        return DMat4::from_rotation_y(degrees.to_radians());
    };
    DMat4::from_cols(
        DVec4::new(c, 0.0, -s, 0.0),
        DVec4::Y,
        DVec4::new(s, 0.0, c, 0.0),
        DVec4::W,
    )
}

fn rotation_z(degrees: f64) -> DMat4 {
    let Some((s, c)) = quarter_turn(degrees) else {
        return DMat4::from_rotation_z(degrees.to_radians());
    };
    DMat4::from_cols(
        DVec4::new(c, s, 0.0, 0.0),
        DVec4::new(-s, c, 0.0, 0.0),
        DVec4::Z,
        DVec4::W,
    )
}

/// Exact `(sin, cos)` of a whole number of quarter turns.
fn quarter_turn(degrees: f64) -> Option<(f64, f64)> {
    if degrees % 90.0 != 0.0 {
        return None;
    }
    Some(match ((degrees / 90.0) as i64).rem_euclid(4) {
        0 => (0.0, 1.0),
        1 => (1.0, 0.0),
        2 => (0.0, -1.0),
        _ => (-1.0, 0.0),
    })
}
