//! # Cap Spacer
//!
//! Stepped bushing that seats a pen cap over the pen shaft. The cap bore
//! opens at the base, the shaft bore sits directly on top of it.

use config::constants::CUT_OVERSHOOT;
use glam::DVec3;
use solid_ir::SolidNode;
use solid_mesh::{solid_to_mesh, Mesh};
use tracing::debug;

use crate::error::PartError;
use crate::params::CapSpacerParams;

/// The stepped cap spacer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapSpacer;

impl CapSpacer {
    /// Validates the parameters and returns the solid tree.
    ///
    /// Both bores run past the open end they cut through; the step between
    /// them sits at exactly `capBoreDepth`.
    pub fn solid(params: &CapSpacerParams) -> Result<SolidNode, PartError> {
        let tessellation = params.validate()?;
        let segments = tessellation.facet_count;

        let body = SolidNode::cylinder(params.total_height(), params.outer_diameter, segments)?;

        let cap_bore = SolidNode::cylinder(
            params.cap_bore_depth + CUT_OVERSHOOT,
            params.cap_bore_diameter,
            segments,
        )?
        .translate(DVec3::new(0.0, 0.0, -CUT_OVERSHOOT));

        let shaft_bore = SolidNode::cylinder(
            params.shaft_bore_depth + CUT_OVERSHOOT,
            params.shaft_bore_diameter,
            segments,
        )?
        .translate(DVec3::new(0.0, 0.0, params.step_height()));

        Ok(SolidNode::difference(vec![body, cap_bore, shaft_bore])?)
    }

    /// Validates the parameters and meshes the spacer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use plotter_parts::{CapSpacer, CapSpacerParams};
    ///
    /// let params = CapSpacerParams { facet_count: 16, ..CapSpacerParams::default() };
    /// let mesh = CapSpacer::build(&params)?;
    /// let (min, max) = mesh.bounding_box();
    /// assert_eq!(max.z - min.z, 15.0);
    /// # Ok::<(), plotter_parts::PartError>(())
    /// ```
    pub fn build(params: &CapSpacerParams) -> Result<Mesh, PartError> {
        let tree = Self::solid(params)?;
        let mesh = solid_to_mesh(&tree)?;
        debug!(
            part = CapSpacerParams::PART,
            height = params.total_height(),
            facets = params.facet_count,
            triangles = mesh.triangle_count(),
            "part built"
        );
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use solid_mesh::primitives::cylinder::polygon_area;

    #[test]
    fn test_default_spacer_height() {
        let params = CapSpacerParams::default();
        let mesh = CapSpacer::build(&params).unwrap();
        let (min, max) = mesh.bounding_box();

        assert_eq!(min.z, 0.0);
        assert_eq!(max.z, 15.0);
        assert_relative_eq!(max.x - min.x, 20.0, epsilon = 1e-9);
        assert!(mesh.validate());
    }

    #[test]
    fn test_spacer_volume() {
        let params = CapSpacerParams::default();
        let n = params.facet_count;
        let expected = polygon_area(10.0, n) * 15.0
            - polygon_area(4.75, n) * 6.5
            - polygon_area(5.75, n) * 8.5;

        let mesh = CapSpacer::build(&params).unwrap();
        assert_relative_eq!(mesh.volume(), expected, max_relative = 1e-6);
    }

    #[test]
    fn test_step_sits_at_cap_depth() {
        let params = CapSpacerParams::default();
        let mesh = CapSpacer::build(&params).unwrap();

        let apothem = |diameter: f64| {
            diameter / 2.0 * (std::f64::consts::PI / params.facet_count as f64).cos() - 1e-6
        };
        let step = params.step_height();
        for v in mesh.vertices() {
            let r = v.truncate().length();
            if v.z > step + 1e-9 {
                assert!(r >= apothem(params.shaft_bore_diameter), "vertex {v} inside the shaft bore");
            } else if v.z < step - 1e-9 {
                assert!(r >= apothem(params.cap_bore_diameter), "vertex {v} inside the cap bore");
            }
        }

        // The ledge between the bores starts at the cap bore's rim
        let cap_r = params.cap_bore_diameter / 2.0;
        assert!(mesh.vertices().iter().any(|v| {
            let r = v.truncate().length();
            (v.z - step).abs() < 1e-9 && r >= apothem(params.cap_bore_diameter) && r <= cap_r + 1e-9
        }));
    }

    #[test]
    fn test_oversized_bore_fails_before_geometry() {
        let params = CapSpacerParams {
            cap_bore_diameter: 25.0,
            outer_diameter: 20.0,
            ..CapSpacerParams::default()
        };
        let err = CapSpacer::solid(&params).unwrap_err();
        assert!(matches!(err, PartError::Configuration { part: "cap spacer", .. }));
    }

    #[test]
    fn test_tree_has_three_cylinders() {
        let tree = CapSpacer::solid(&CapSpacerParams::default()).unwrap();
        assert_eq!(tree.primitive_count(), 3);
    }

    #[test]
    fn test_spacer_is_deterministic() {
        let params = CapSpacerParams {
            facet_count: 32,
            ..CapSpacerParams::default()
        };
        assert_eq!(
            CapSpacer::build(&params).unwrap(),
            CapSpacer::build(&params).unwrap()
        );
    }
}
