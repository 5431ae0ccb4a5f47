use approx::assert_abs_diff_eq;
use glam::DVec3;
use twisted_torus::{
    add_twisted_torus, generate, generate_mesh, GenerationParameters, MeshError,
    MeshObjectBuilder, QuadMesh, RadiusInput, TorusRequest,
};

#[test]
fn counts_follow_segment_product() {
    for major in 3..=9 {
        for minor in 3..=9 {
            let (vertices, faces) = generate(1.0, 0.25, major, minor, major % 4);
            let tot = (major * minor) as usize;
            assert_eq!(vertices.len(), 3 * tot);
            assert_eq!(faces.len(), 4 * tot);
        }
    }
}

#[test]
fn twisted_surfaces_stay_closed() {
    for twists in 0..=10 {
        let mesh = generate_mesh(&GenerationParameters::new(1.0, 0.25, 24, 8, twists)).unwrap();
        assert!(mesh.is_closed(), "twists={twists}");
        assert!(mesh.is_oriented(), "twists={twists}");
        assert!(mesh.vertex_valence().iter().all(|&uses| uses == 4));
    }
}

#[test]
fn four_by_four_plain_torus() {
    let (vertices, faces) = generate(1.0, 0.25, 4, 4, 0);
    let mesh = QuadMesh::from_buffers(&vertices, &faces).unwrap();
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.face_count(), 16);

    let v0 = mesh.vertex(0);
    assert_abs_diff_eq!(v0.x, 1.25, epsilon = 1e-12);
    assert_abs_diff_eq!(v0.y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(v0.z, 0.0, epsilon = 1e-12);

    // Second ring is the first one turned a quarter about z.
    let v4 = mesh.vertex(4);
    assert_abs_diff_eq!(v4.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(v4.y, 1.25, epsilon = 1e-12);
}

#[test]
fn identical_calls_are_bit_identical() {
    let a = generate(0.9, 0.31, 200, 100, 7);
    let b = generate(0.9, 0.31, 200, 100, 7);
    assert_eq!(a.1, b.1);
    assert!(a.0.iter().zip(&b.0).all(|(x, y)| x.to_bits() == y.to_bits()));
}

#[test]
fn exterior_interior_matches_equivalent_major_minor() {
    let derived = TorusRequest {
        radii: RadiusInput::exterior_interior(1.0, 0.5),
        major_segments: 12,
        minor_segments: 6,
        twists: 2,
    }
    .resolve()
    .unwrap();

    let direct = GenerationParameters::new(0.75, 0.25, 12, 6, 2);
    assert_eq!(derived, direct);
    assert_eq!(
        generate_mesh(&derived).unwrap(),
        generate_mesh(&direct).unwrap()
    );
}

#[test]
fn invalid_parameters_are_reported() {
    let err = generate_mesh(&GenerationParameters::new(1.0, 0.0, 12, 6, 0)).unwrap_err();
    match err {
        MeshError::InvalidParameter { name, .. } => assert_eq!(name, "minor_radius"),
        other => panic!("expected invalid parameter, got {other:?}"),
    }
}

#[test]
fn add_twisted_torus_places_object() {
    let mut builder = MeshObjectBuilder::default();
    let origin = DVec3::new(0.0, -3.0, 1.0);
    let object = add_twisted_torus(&mut builder, &TorusRequest::default(), origin).unwrap();

    assert!(object.flat_shaded);
    assert_eq!(object.location, origin);
    assert_eq!(object.mesh.face_count(), 48 * 12);

    let flat = object.world_mesh().to_flat_buffers();
    assert_eq!(flat.triangle_count(), 2 * 48 * 12);
    let mean_y: f32 = flat.positions.chunks_exact(3).map(|p| p[1]).sum::<f32>()
        / flat.vertex_count() as f32;
    assert!((mean_y + 3.0).abs() < 1e-3);
}
