//! # Part Parameters
//!
//! Configuration records for both parts. Every field has a default so a
//! partial JSON record only overrides what it names.

use config::constants::{TessellationConfig, DEFAULT_FACET_COUNT};
use serde::{Deserialize, Serialize};

use crate::error::PartError;

// =============================================================================
// BARREL PRESETS
// =============================================================================

/// Barrel diameter of the pen the holder is sized for by default.
pub const PEN_BARREL_DIAMETER: f64 = 11.5;

/// Barrel diameter of a standard hexagonal pencil.
pub const PENCIL_BARREL_DIAMETER: f64 = 7.5;

// =============================================================================
// PEN HOLDER ASSEMBLY
// =============================================================================

/// Parameters of the pen holder and its stepper-motor mount.
///
/// # Example
///
/// ```rust
/// use plotter_parts::PenHolderParams;
///
/// let params = PenHolderParams::default();
/// assert!((params.mount_outer_size() - 45.3).abs() < 1e-9);
/// assert!((params.holder_outer_diameter() - 19.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PenHolderParams {
    /// Side of the square motor face.
    pub motor_face_size: f64,
    /// Diameter of the bore for the motor's centring boss.
    pub bore_diameter: f64,
    /// Width of the mounting-pin clearance slot.
    pub pin_slot_width: f64,
    /// Wall thickness `t` of the motor mount.
    pub mount_wall_thickness: f64,
    /// Depth of the motor mount along the motor axis.
    pub mount_depth: f64,
    /// Diameter of the pen or pencil barrel.
    pub barrel_diameter: f64,
    /// Wall thickness around the barrel.
    pub holder_wall_thickness: f64,
    /// Height of the holder body.
    pub holder_height: f64,
    /// Diameter of the retention pin hole.
    pub retention_hole_diameter: f64,
    /// Length of the retention pin hole; `wall + barrel` when unset.
    pub retention_hole_length: Option<f64>,
    /// Facets approximating every circle.
    pub facet_count: u32,
    /// Mark the clip block as preview-only highlighted geometry.
    pub highlight_clip: bool,
}

impl Default for PenHolderParams {
    fn default() -> Self {
        Self {
            motor_face_size: 42.3,
            bore_diameter: 22.5,
            pin_slot_width: 5.0,
            mount_wall_thickness: 1.5,
            mount_depth: 12.0,
            barrel_diameter: PEN_BARREL_DIAMETER,
            holder_wall_thickness: 4.0,
            holder_height: 20.0,
            retention_hole_diameter: 3.0,
            retention_hole_length: None,
            facet_count: DEFAULT_FACET_COUNT,
            highlight_clip: false,
        }
    }
}

impl PenHolderParams {
    pub(crate) const PART: &'static str = "pen holder";

    /// Default parameters sized for a pen.
    pub fn for_pen() -> Self {
        Self::default()
    }

    /// Default parameters sized for a pencil.
    pub fn for_pencil() -> Self {
        Self {
            barrel_diameter: PENCIL_BARREL_DIAMETER,
            ..Self::default()
        }
    }

    /// Side of the motor mount's outer block.
    pub fn mount_outer_size(&self) -> f64 {
        self.motor_face_size + 2.0 * self.mount_wall_thickness
    }

    /// Diameter of the holder's outer cylinder.
    pub fn holder_outer_diameter(&self) -> f64 {
        self.barrel_diameter + 2.0 * self.holder_wall_thickness
    }

    /// Depth of the clip block measured from the barrel axis.
    pub fn clip_depth(&self) -> f64 {
        self.barrel_diameter + self.holder_wall_thickness
    }

    /// Length of the retention pin hole actually cut.
    pub fn retention_length(&self) -> f64 {
        self.retention_hole_length
            .unwrap_or(self.holder_wall_thickness + self.barrel_diameter)
    }

    /// Checks every constraint and returns the tessellation to build with.
    pub fn validate(&self) -> Result<TessellationConfig, PartError> {
        let part = Self::PART;
        for (name, value) in [
            ("motorFaceSize", self.motor_face_size),
            ("boreDiameter", self.bore_diameter),
            ("pinSlotWidth", self.pin_slot_width),
            ("mountWallThickness", self.mount_wall_thickness),
            ("mountDepth", self.mount_depth),
            ("barrelDiameter", self.barrel_diameter),
            ("holderWallThickness", self.holder_wall_thickness),
            ("holderHeight", self.holder_height),
            ("retentionHoleDiameter", self.retention_hole_diameter),
            ("retentionHoleLength", self.retention_length()),
        ] {
            require_positive(part, name, value)?;
        }

        require_less(part, ("boreDiameter", self.bore_diameter), ("motorFaceSize", self.motor_face_size))?;
        require_less(part, ("pinSlotWidth", self.pin_slot_width), ("motorFaceSize", self.motor_face_size))?;
        require_less(
            part,
            ("mountWallThickness", self.mount_wall_thickness),
            ("mountDepth", self.mount_depth),
        )?;
        require_less(
            part,
            ("retentionHoleDiameter", self.retention_hole_diameter),
            ("barrelDiameter", self.barrel_diameter),
        )?;
        require_less(
            part,
            ("retentionHoleDiameter", self.retention_hole_diameter),
            ("holderHeight", self.holder_height),
        )?;

        let crossing = self.holder_wall_thickness + self.barrel_diameter;
        if self.retention_length() < crossing {
            return Err(PartError::configuration(
                part,
                format!(
                    "retentionHoleLength {} must be at least wall + barrel ({crossing})",
                    self.retention_length()
                ),
            ));
        }

        tessellation(part, self.facet_count)
    }
}

// =============================================================================
// CAP SPACER
// =============================================================================

/// Parameters of the stepped cap spacer.
///
/// # Example
///
/// ```rust
/// use plotter_parts::CapSpacerParams;
///
/// let params = CapSpacerParams::default();
/// assert_eq!(params.total_height(), 15.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CapSpacerParams {
    pub outer_diameter: f64,
    pub cap_bore_diameter: f64,
    pub cap_bore_depth: f64,
    pub shaft_bore_diameter: f64,
    pub shaft_bore_depth: f64,
    pub facet_count: u32,
}

impl Default for CapSpacerParams {
    fn default() -> Self {
        Self {
            outer_diameter: 20.0,
            cap_bore_diameter: 9.5,
            cap_bore_depth: 6.5,
            shaft_bore_diameter: 11.5,
            shaft_bore_depth: 8.5,
            facet_count: DEFAULT_FACET_COUNT,
        }
    }
}

impl CapSpacerParams {
    pub(crate) const PART: &'static str = "cap spacer";

    /// Height of the spacer; always the sum of both bore depths.
    pub fn total_height(&self) -> f64 {
        self.cap_bore_depth + self.shaft_bore_depth
    }

    /// Height at which the cap bore gives way to the shaft bore.
    pub fn step_height(&self) -> f64 {
        self.cap_bore_depth
    }

    /// Checks every constraint and returns the tessellation to build with.
    pub fn validate(&self) -> Result<TessellationConfig, PartError> {
        let part = Self::PART;
        for (name, value) in [
            ("outerDiameter", self.outer_diameter),
            ("capBoreDiameter", self.cap_bore_diameter),
            ("capBoreDepth", self.cap_bore_depth),
            ("shaftBoreDiameter", self.shaft_bore_diameter),
            ("shaftBoreDepth", self.shaft_bore_depth),
        ] {
            require_positive(part, name, value)?;
        }

        let outer = ("outerDiameter", self.outer_diameter);
        require_less(part, ("capBoreDiameter", self.cap_bore_diameter), outer)?;
        require_less(part, ("shaftBoreDiameter", self.shaft_bore_diameter), outer)?;

        tessellation(part, self.facet_count)
    }
}

// =============================================================================
// VALIDATION HELPERS
// =============================================================================

fn require_positive(part: &'static str, name: &str, value: f64) -> Result<(), PartError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PartError::configuration(
            part,
            format!("{name} must be positive: {value}"),
        ))
    }
}

fn require_less(
    part: &'static str,
    (name, value): (&str, f64),
    (limit_name, limit): (&str, f64),
) -> Result<(), PartError> {
    if value < limit {
        Ok(())
    } else {
        Err(PartError::configuration(
            part,
            format!("{name} {value} must be less than {limit_name} {limit}"),
        ))
    }
}

fn tessellation(part: &'static str, facet_count: u32) -> Result<TessellationConfig, PartError> {
    TessellationConfig::new(facet_count)
        .map_err(|err| PartError::configuration(part, err.to_string()))
}
