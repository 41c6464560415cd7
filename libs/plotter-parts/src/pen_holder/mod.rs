//! # Pen Holder Assembly
//!
//! A pen or pencil holder at the origin joined to a stepper-motor mount.
//!
//! ## Layout
//!
//! ```text
//!        +Y
//!         │   ┌──────────────┐
//!         │   │ motor mount  │  bore axis along X
//!         │   └──────────────┘
//!         │   ┌──────────────┐  y = barrel + wall
//!         │   │  clip block  │
//!         │   │   ( ○ )      │  barrel axis along Z
//!         │   └──────────────┘
//!         └────────────────────── +X
//! ```

use config::constants::{TessellationConfig, CUT_OVERSHOOT, HIGHLIGHT_COLOR};
use glam::DVec3;
use solid_ir::SolidNode;
use solid_mesh::{solid_to_mesh, Mesh};
use tracing::debug;

use crate::error::PartError;
use crate::params::PenHolderParams;


/// Euler rotation presenting the mount's bore axis along the assembly X axis.
const MOUNT_ROTATION: DVec3 = DVec3::new(90.0, 0.0, 90.0);

/// Builds the motor mount in its own frame.
///
/// The outer block spans `[0, outer]² × [0, depth]` with the motor face
/// towards +Z. The near face at `z = 0` keeps a wall of thickness `t`
/// pierced by the bore; the far face is open.
pub fn build_motor_mount(
    params: &PenHolderParams,
    tessellation: TessellationConfig,
) -> Result<SolidNode, PartError> {
    let t = params.mount_wall_thickness;
    let face = params.motor_face_size;
    let depth = params.mount_depth;
    let outer = params.mount_outer_size();
    let centre = outer / 2.0;

    let block = SolidNode::cube(DVec3::new(outer, outer, depth), false)?;

    let cavity = SolidNode::cube(DVec3::new(face, face, depth), false)?.translate(DVec3::splat(t));

    let bore = SolidNode::cylinder(
        depth + 2.0 * CUT_OVERSHOOT,
        params.bore_diameter,
        tessellation.facet_count,
    )?
    .translate(DVec3::new(centre, centre, -CUT_OVERSHOOT));

    // From the face centre out through the +Y wall, clear of the near wall
    let pin_slot = SolidNode::cube(
        DVec3::new(
            params.pin_slot_width,
            centre + CUT_OVERSHOOT,
            depth - t + CUT_OVERSHOOT,
        ),
        false,
    )?
    .translate(DVec3::new(centre - params.pin_slot_width / 2.0, centre, t));

    Ok(SolidNode::difference(vec![block, cavity, bore, pin_slot])?)
}

/// Builds the pen holder body around the barrel axis (the Z axis).
pub fn build_pencil_holder(
    params: &PenHolderParams,
    tessellation: TessellationConfig,
) -> Result<SolidNode, PartError> {
    let segments = tessellation.facet_count;
    Ok(SolidNode::difference(vec![
        holder_shell(params, segments)?,
        barrel_bore(params, segments)?,
        retention_bore(params, segments)?,
    ])?)
}

/// Outer cylinder joined to the clip block on its +Y side.
fn holder_shell(params: &PenHolderParams, segments: u32) -> Result<SolidNode, PartError> {
    let outer = params.holder_outer_diameter();
    let height = params.holder_height;

    let body = SolidNode::cylinder(height, outer, segments)?;

    let mut clip = SolidNode::cube(DVec3::new(outer, params.clip_depth(), height), false)?
        .translate(DVec3::new(-outer / 2.0, 0.0, 0.0));
    if params.highlight_clip {
        clip = clip.highlight(HIGHLIGHT_COLOR);
    }

    Ok(SolidNode::union(vec![body, clip])?)
}

fn barrel_bore(params: &PenHolderParams, segments: u32) -> Result<SolidNode, PartError> {
    let wall = params.holder_wall_thickness;
    Ok(
        SolidNode::cylinder(params.holder_height + 2.0 * wall, params.barrel_diameter, segments)?
            .translate(DVec3::new(0.0, 0.0, -wall)),
    )
}

/// Pin hole along +X at half height, entering through the -X outer surface.
///
/// Ends `retention_length` past that surface, so the default length reaches
/// the far side of the barrel cavity.
fn retention_bore(params: &PenHolderParams, segments: u32) -> Result<SolidNode, PartError> {
    let entry = -params.holder_outer_diameter() / 2.0;
    Ok(SolidNode::cylinder(
        params.retention_length() + CUT_OVERSHOOT,
        params.retention_hole_diameter,
        segments,
    )?
    .rotate_degrees(DVec3::new(0.0, 90.0, 0.0))
    .translate(DVec3::new(
        entry - CUT_OVERSHOOT,
        0.0,
        params.holder_height / 2.0,
    )))
}

/// Places the holder at the origin and the rotated mount beside its clip.
pub fn compose(
    params: &PenHolderParams,
    tessellation: TessellationConfig,
) -> Result<SolidNode, PartError> {
    let holder = build_pencil_holder(params, tessellation)?;
    let mount = build_motor_mount(params, tessellation)?
        .rotate_degrees(MOUNT_ROTATION)
        .translate(DVec3::new(
            -params.mount_depth / 2.0,
            params.barrel_diameter + params.holder_wall_thickness,
            0.0,
        ));
    Ok(SolidNode::union(vec![holder, mount])?)
}

/// The pen holder joined to its motor mount.
#[derive(Debug, Clone, Copy, Default)]
pub struct PenHolderAssembly;

impl PenHolderAssembly {
    /// Validates the parameters and returns the solid tree.
    pub fn solid(params: &PenHolderParams) -> Result<SolidNode, PartError> {
        let tessellation = params.validate()?;
        compose(params, tessellation)
    }

    /// Validates the parameters and meshes the assembly.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use plotter_parts::{PenHolderAssembly, PenHolderParams};
    ///
    /// let mesh = PenHolderAssembly::build(&PenHolderParams::for_pencil())?;
    /// assert!(!mesh.is_empty());
    /// # Ok::<(), plotter_parts::PartError>(())
    /// ```
    pub fn build(params: &PenHolderParams) -> Result<Mesh, PartError> {
        let tree = Self::solid(params)?;
        let mesh = solid_to_mesh(&tree)?;
        debug!(
            part = PenHolderParams::PART,
            barrel = params.barrel_diameter,
            facets = params.facet_count,
            triangles = mesh.triangle_count(),
            "part built"
        );
        Ok(mesh)
    }
}
