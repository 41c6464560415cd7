//! # Part Errors
//!
//! Errors raised while validating part parameters or building their meshes.

use solid_ir::IrError;
use solid_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur while building a part.
#[derive(Debug, Error)]
pub enum PartError {
    /// A parameter or derived dimension violates the part's constraints.
    ///
    /// Raised before any geometry is constructed.
    #[error("invalid {part} configuration: {message}")]
    Configuration {
        part: &'static str,
        message: String,
    },

    /// The mesh kernel rejected the geometry.
    #[error(transparent)]
    Geometry(#[from] MeshError),

    /// A primitive failed validation while the tree was assembled.
    #[error(transparent)]
    Ir(#[from] IrError),
}

impl PartError {
    /// Creates a configuration error.
    pub fn configuration(part: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            part,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PartError::configuration("cap spacer", "capBoreDiameter 25 must be less than outerDiameter 20");
        assert_eq!(
            err.to_string(),
            "invalid cap spacer configuration: capBoreDiameter 25 must be less than outerDiameter 20"
        );
    }

    #[test]
    fn test_geometry_error_is_propagated_unchanged() {
        let err: PartError = MeshError::degenerate("empty").into();
        assert_eq!(err.to_string(), "Degenerate geometry: empty");
    }
}
