//! # Solid Mesh
//!
//! Pure Rust mesh generation for `solid-ir` trees.
//!
//! ## Architecture
//!
//! ```text
//! solid-ir (SolidNode) → solid-mesh (Mesh)
//! ```
//!
//! ## Algorithms
//!
//! - **Boolean Operations**: BSP trees (csg.js algorithm)
//! - **Primitives**: Direct cube and cylinder tessellation
//! - **Output**: Fan triangulation with vertex welding
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use solid_ir::SolidNode;
//! use solid_mesh::solid_to_mesh;
//!
//! let tree = SolidNode::difference(vec![
//!     SolidNode::cube(DVec3::splat(10.0), true)?,
//!     SolidNode::cube(DVec3::new(4.0, 4.0, 20.0), true)?,
//! ])?;
//! let mesh = solid_to_mesh(&tree)?;
//! assert!(mesh.triangle_count() > 12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod from_ir;
pub mod mesh;
pub mod ops;
pub mod primitives;

pub use error::MeshError;
pub use from_ir::solid_to_mesh;
pub use mesh::Mesh;
pub use ops::boolean::{difference, intersection, union};
