//! # Solid IR
//!
//! Intermediate representation for constructive solid geometry.
//! Part recipes build a [`SolidNode`] tree; `solid-mesh` evaluates it.
//!
//! ## Architecture
//!
//! ```text
//! plotter-parts (recipes) → solid-ir (SolidNode tree) → solid-mesh (Mesh)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use solid_ir::SolidNode;
//!
//! let block = SolidNode::cube(DVec3::new(10.0, 10.0, 5.0), false)?;
//! let bore = SolidNode::cylinder(5.0, 4.0, 32)?.translate(DVec3::new(5.0, 5.0, 0.0));
//! let part = SolidNode::difference(vec![block, bore])?;
//! assert_eq!(part.primitive_count(), 2);
//! # Ok::<(), solid_ir::IrError>(())
//! ```

pub mod error;
pub mod node;

pub use error::IrError;
pub use node::{BooleanOperation, SolidNode};
