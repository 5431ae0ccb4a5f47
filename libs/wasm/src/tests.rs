//! Tests for the WASM-facing helpers.

use super::*;

/// The four-by-four example produces sixteen quads.
#[test]
fn generate_produces_example_mesh() {
    let mesh = generate_twisted_torus_internal(1.0, 0.25, 4, 4, 0).expect("generation succeeds");

    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.face_count(), 16);
    assert_eq!(mesh.triangle_count(), 32);
    assert_eq!(mesh.vertices().len(), 16 * 3);
    assert_eq!(mesh.quads().len(), 16 * 4);
    assert_eq!(mesh.indices().len(), 32 * 3);
    assert_eq!(&mesh.vertices()[..3], &[1.25f32, 0.0, 0.0]);
}

/// Ensures invalid parameters surface explicit errors.
#[test]
fn generate_rejects_invalid_parameters() {
    let err = generate_twisted_torus_internal(1.0, 0.25, 2, 12, 0).unwrap_err();
    assert!(matches!(err, RenderError::Mesh(MeshError::InvalidParameter { .. })));
    assert!(err.to_string().contains("major_segments"));
}

/// Flat-shaded buffers hold three unshared corners per triangle.
#[test]
fn generate_provides_flat_buffers() {
    let mesh = generate_twisted_torus_internal(1.0, 0.25, 8, 6, 2).expect("generation succeeds");
    let triangles = mesh.triangle_count() as usize;

    assert_eq!(mesh.flat_positions().len(), triangles * 9);
    assert_eq!(mesh.flat_normals().len(), triangles * 9);
    assert_eq!(mesh.flat_indices().len(), triangles * 3);
    assert!(mesh.flat_positions().iter().all(|v| v.is_finite()));
}

/// Tests that mesh buffers contain valid data.
#[test]
fn generate_mesh_buffers_valid() {
    let mesh = generate_twisted_torus_internal(2.0, 0.5, 12, 5, 3).expect("generation succeeds");

    let vertex_count = mesh.vertex_count();
    for &idx in mesh.quads().iter().chain(&mesh.indices()) {
        assert!(idx < vertex_count, "Index {} out of range", idx);
    }
}

/// JSON requests accept the exterior/interior mode and an origin.
#[test]
fn json_request_with_exterior_interior() {
    let request = r#"{
        "radii": { "mode": "exterior_interior", "exterior_radius": 2.0, "interior_radius": 1.0 },
        "major_segments": 10,
        "minor_segments": 4,
        "twists": 1,
        "origin": [0.0, 0.0, 5.0]
    }"#;
    let mesh = generate_twisted_torus_json_internal(request).expect("request is valid");

    assert_eq!(mesh.vertex_count(), 40);
    assert_eq!(mesh.location(), vec![0.0, 0.0, 5.0]);
    // Outermost vertex of the first ring sits at the exterior radius.
    assert_eq!(mesh.vertices()[0], 2.0);
}

/// An empty JSON object uses the operator defaults.
#[test]
fn json_request_defaults() {
    let mesh = generate_twisted_torus_json_internal("{}").expect("defaults are valid");
    assert_eq!(mesh.vertex_count(), 48 * 12);
    assert_eq!(mesh.location(), vec![0.0, 0.0, 0.0]);
}

/// Malformed JSON is reported as a request error.
#[test]
fn json_request_rejects_malformed() {
    let err = generate_twisted_torus_json_internal("{ twists: ").unwrap_err();
    assert!(matches!(err, RenderError::Request(_)));
}

/// The advertised defaults round-trip through the JSON entry point.
#[test]
fn default_request_round_trips() {
    let json = default_request_internal();
    let request: RenderRequest = serde_json::from_str(&json).expect("defaults parse");
    assert_eq!(request.torus, TorusRequest::default());
    assert_eq!(request.origin, [0.0; 3]);
}

/// Grids past the 32-bit range are rejected before any buffer is sized.
#[test]
fn generate_rejects_grid_past_u32_range() {
    let err = generate_twisted_torus_internal(1.0, 0.25, 65_536, 65_537, 0).unwrap_err();
    assert!(matches!(err, RenderError::Mesh(MeshError::TooManyVertices { .. })));
}
