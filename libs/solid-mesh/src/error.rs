//! # Mesh Errors
//!
//! Error types for mesh generation operations.

use solid_ir::IrError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Invalid node reached the kernel
    #[error("Invalid geometry node: {0}")]
    Ir(#[from] IrError),

    /// Degenerate geometry (zero-size primitive or empty boolean result)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::degenerate("difference produced an empty solid");
        assert_eq!(
            err.to_string(),
            "Degenerate geometry: difference produced an empty solid"
        );

        let err = MeshError::TooManyTriangles { count: 11, max: 10 };
        assert!(err.to_string().contains("max: 10"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
