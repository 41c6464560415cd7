//! # Config Crate
//!
//! Centralized configuration constants for the plotter parts pipeline.
//! Tolerances, tessellation defaults and safety limits live here so the
//! geometry crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{TessellationConfig, DEFAULT_FACET_COUNT, EPSILON};
//!
//! let tessellation = TessellationConfig::default();
//! assert_eq!(tessellation.facet_count, DEFAULT_FACET_COUNT);
//!
//! let value: f64 = 1e-11;
//! assert!(value.abs() < EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Millimetres**: Every length in the workspace is expressed in mm
//! - **Validated**: Runtime-tunable values go through checked constructors

pub mod constants;
