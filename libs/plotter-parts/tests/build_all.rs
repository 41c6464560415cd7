//! Integration tests for building the parts from configuration records.

use approx::assert_relative_eq;
use plotter_parts::{build_all, CapSpacer, CapSpacerParams, PartError, PartsConfig, PenHolderAssembly};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn builds_both_parts_from_json() {
    init_tracing();
    let config: PartsConfig = serde_json::from_str(
        r#"{
            "penHolder": { "barrelDiameter": 7.5, "facetCount": 24 },
            "capSpacer": { "facetCount": 24 }
        }"#,
    )
    .unwrap();

    let meshes = build_all(&config).unwrap();

    assert!(!meshes.pen_holder.is_empty());
    assert!(!meshes.cap_spacer.is_empty());
    assert_eq!(
        meshes.cap_spacer,
        CapSpacer::build(&config.cap_spacer).unwrap()
    );
    assert_eq!(
        meshes.pen_holder,
        PenHolderAssembly::build(&config.pen_holder).unwrap()
    );
}

#[test]
fn scenario_spacer_height() {
    init_tracing();
    let params = CapSpacerParams {
        outer_diameter: 20.0,
        cap_bore_diameter: 9.5,
        cap_bore_depth: 6.5,
        shaft_bore_diameter: 11.5,
        shaft_bore_depth: 8.5,
        facet_count: 48,
    };
    let mesh = CapSpacer::build(&params).unwrap();
    let (min, max) = mesh.bounding_box();
    assert_relative_eq!(max.z - min.z, 15.0, epsilon = 1e-12);
}

#[test]
fn invalid_spacer_fails_whole_build() {
    init_tracing();
    let mut config = PartsConfig::default();
    config.cap_spacer.cap_bore_diameter = 25.0;

    let err = build_all(&config).unwrap_err();
    assert!(matches!(err, PartError::Configuration { part: "cap spacer", .. }));
}

#[test]
fn export_buffers_are_consistent() {
    init_tracing();
    let params = CapSpacerParams {
        facet_count: 16,
        ..CapSpacerParams::default()
    };
    let mesh = CapSpacer::build(&params).unwrap();

    let vertices = mesh.vertices_f32();
    let indices = mesh.indices_u32();
    assert_eq!(vertices.len(), mesh.vertex_count() * 3);
    assert_eq!(indices.len(), mesh.triangle_count() * 3);
    assert!(indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
}
