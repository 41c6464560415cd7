//! # Mesh Operations
//!
//! Operations that combine meshes.

pub mod boolean;

pub use boolean::{difference, difference_all, intersection, intersection_all, union, union_all};
