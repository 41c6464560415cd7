//! # IR Errors
//!
//! Errors raised when a geometry node fails validation.

use glam::DVec3;
use thiserror::Error;

use crate::node::BooleanOperation;

/// Errors raised when IR construction fails validation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IrError {
    /// Cube size must exceed the configured epsilon on every axis.
    #[error("cube dimensions must exceed tolerance: {size:?}")]
    CubeTooSmall { size: DVec3 },

    /// Cylinder height must be positive.
    #[error("cylinder height must be positive: {height}")]
    CylinderHeight { height: f64 },

    /// Cylinder radii must be non-negative with at least one positive.
    #[error("cylinder radii must be non-negative with one positive: r1={radius_bottom}, r2={radius_top}")]
    CylinderRadius { radius_bottom: f64, radius_top: f64 },

    /// Not enough facets to approximate a circle.
    #[error("cylinder needs at least {min} segments: {segments}")]
    TooFewSegments { segments: u32, min: u32 },

    /// Boolean node without operands.
    #[error("{operation} requires at least one child")]
    EmptyBoolean { operation: BooleanOperation },
}
