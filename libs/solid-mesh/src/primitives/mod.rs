//! # Primitives
//!
//! Mesh generation for the solid primitives (cube, cylinder).

pub mod cube;
pub mod cylinder;

pub use cube::create_cube;
pub use cylinder::create_cylinder;
