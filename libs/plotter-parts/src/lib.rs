//! # Plotter Parts
//!
//! Parametric models of the pen plotter attachment.
//!
//! ## Architecture
//!
//! ```text
//! PenHolderParams / CapSpacerParams
//!          │ validate
//!          ▼
//! pen_holder / cap_spacer (SolidNode recipes)
//!          │ solid_to_mesh
//!          ▼
//!        Mesh
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use plotter_parts::{build_all, PartsConfig};
//!
//! let config: PartsConfig = serde_json::from_str(r#"{
//!     "penHolder": { "barrelDiameter": 7.5 },
//!     "capSpacer": { "facetCount": 32 }
//! }"#)?;
//! let meshes = build_all(&config)?;
//! println!("holder: {} triangles", meshes.pen_holder.triangle_count());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cap_spacer;
pub mod error;
pub mod params;
pub mod pen_holder;

pub use cap_spacer::CapSpacer;
pub use error::PartError;
pub use params::{CapSpacerParams, PenHolderParams};
pub use pen_holder::PenHolderAssembly;

use serde::{Deserialize, Serialize};
use solid_mesh::Mesh;
use tracing::debug;

/// Parameters for every part, as read from a single configuration record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartsConfig {
    pub pen_holder: PenHolderParams,
    pub cap_spacer: CapSpacerParams,
}

/// Meshes of every part.
#[derive(Debug, Clone, PartialEq)]
pub struct PartMeshes {
    pub pen_holder: Mesh,
    pub cap_spacer: Mesh,
}

/// Builds both parts in parallel.
///
/// The parts share nothing, so they are meshed on separate rayon workers.
/// The pen holder's error is reported first when both fail.
pub fn build_all(config: &PartsConfig) -> Result<PartMeshes, PartError> {
    let (pen_holder, cap_spacer) = rayon::join(
        || PenHolderAssembly::build(&config.pen_holder),
        || CapSpacer::build(&config.cap_spacer),
    );
    let meshes = PartMeshes {
        pen_holder: pen_holder?,
        cap_spacer: cap_spacer?,
    };
    debug!(
        pen_holder = meshes.pen_holder.triangle_count(),
        cap_spacer = meshes.cap_spacer.triangle_count(),
        "all parts built"
    );
    Ok(meshes)
}
