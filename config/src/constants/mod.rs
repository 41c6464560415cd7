//! # Configuration Constants
//!
//! Shared tolerances, tessellation defaults and safety limits.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Facet counts used to approximate circles
//! - **Limits**: Maximum mesh sizes and stack growth for recursive walks
//! - **Preview**: Colours used for debug-only highlighting

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons of derived dimensions.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// assert!((0.1 + 0.2 - 0.3_f64).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-9;

/// Thickness of a plane when classifying points during BSP clipping.
///
/// Points closer than this to a splitting plane are treated as coplanar.
/// Larger than [`EPSILON`] so that vertices produced by earlier splits
/// still land on the plane they were cut from.
pub const PLANE_EPSILON: f64 = 1e-5;

/// Minimum triangle area kept when converting polygons back to a mesh.
pub const MIN_TRIANGLE_AREA: f64 = 1e-12;

/// Scaling factor used to quantize coordinates when welding vertices.
///
/// # Example
///
/// ```rust
/// use config::constants::COORDINATE_SCALE;
///
/// fn weld_key(value: f64) -> i64 {
///     (value * COORDINATE_SCALE).round() as i64
/// }
///
/// assert_eq!(weld_key(1.0000000001), weld_key(1.0));
/// ```
pub const COORDINATE_SCALE: f64 = 1e6;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of facets used to approximate every circle.
///
/// 64 facets keep the chordal error of a 20 mm circle under 0.025 mm,
/// well below a 0.4 mm printer nozzle.
pub const DEFAULT_FACET_COUNT: u32 = 64;

/// Minimum number of facets for a circular primitive (a triangle).
pub const MIN_FACETS: u32 = 3;

/// Maximum number of facets for a circular primitive.
///
/// BSP boolean cost grows roughly quadratically with the facet count; at
/// 1000 facets the pen holder assembly takes minutes to mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_FACETS, MIN_FACETS};
///
/// let requested = 5000_u32;
/// assert_eq!(requested.clamp(MIN_FACETS, MAX_FACETS), MAX_FACETS);
/// ```
pub const MAX_FACETS: u32 = 256;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
pub const MAX_TRIANGLES: usize = 10_000_000;

/// Remaining stack below which recursive walks grow a new segment.
pub const STACK_RED_ZONE: usize = 64 * 1024;

/// Size of each stack segment allocated by `stacker`.
///
/// # Example
///
/// ```rust
/// use config::constants::{STACK_GROWTH, STACK_RED_ZONE};
///
/// assert!(STACK_GROWTH > STACK_RED_ZONE);
/// ```
pub const STACK_GROWTH: usize = 4 * 1024 * 1024;

/// Distance a cutting solid extends past the face it opens onto.
///
/// Keeps subtracted solids from sharing a face with the body they cut.
pub const CUT_OVERSHOOT: f64 = 1.0;

// =============================================================================
// PREVIEW CONSTANTS
// =============================================================================

/// RGBA colour attached to preview-only highlighted solids.
pub const HIGHLIGHT_COLOR: [f32; 4] = [1.0, 0.35, 0.35, 0.5];

// =============================================================================
// TESSELLATION CONFIG
// =============================================================================

/// Validated tessellation settings shared by the part builders.
///
/// # Examples
/// ```
/// use config::constants::TessellationConfig;
/// let cfg = TessellationConfig::new(32).expect("valid facet count");
/// assert_eq!(cfg.facet_count, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationConfig {
    /// Number of straight segments approximating each circle.
    pub facet_count: u32,
}

impl TessellationConfig {
    /// Builds a configuration after checking the facet count lies within
    /// [`MIN_FACETS`]..=[`MAX_FACETS`].
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, TessellationConfig};
    /// assert_eq!(
    ///     TessellationConfig::new(2).unwrap_err(),
    ///     ConfigError::InvalidFacetCount(2)
    /// );
    /// ```
    pub fn new(facet_count: u32) -> Result<Self, ConfigError> {
        if !(MIN_FACETS..=MAX_FACETS).contains(&facet_count) {
            return Err(ConfigError::InvalidFacetCount(facet_count));
        }
        Ok(Self { facet_count })
    }
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            facet_count: DEFAULT_FACET_COUNT,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the facet count falls outside the supported range.
    InvalidFacetCount(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFacetCount(value) => {
                write!(
                    f,
                    "facet count must be within {MIN_FACETS}..={MAX_FACETS}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
