//! End-to-end extraction tests against analytically known surfaces.

use isomesh::{TriangleMesh, compute_normals, marching_cubes, write_ply};

#[test]
fn sphere_vertices_lie_on_the_sphere() {
    let r: f32 = 1.0;
    let step = 0.125;
    let field = move |x: f32, y: f32, z: f32| x * x + y * y + z * z - r * r;

    let vertices = marching_cubes(&field, 0.0, -2.0 * r, 2.0 * r, step);
    assert!(!vertices.is_empty());
    assert_eq!(vertices.len() % 9, 0);

    // Linear interpolation lands every crossing within one cell of the
    // analytic surface.
    let tolerance = step * 3.0_f32.sqrt();
    for v in vertices.chunks_exact(3) {
        let dist = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert!(
            (dist - r).abs() <= tolerance,
            "vertex {v:?} at distance {dist} from origin"
        );
    }
}

#[test]
fn sphere_normals_point_radially_outward() {
    // The trig winding in the table orients triangles so flat normals agree
    // with the field gradient for an SDF-like field.
    let field = |x: f32, y: f32, z: f32| x * x + y * y + z * z - 1.0;
    let mesh = TriangleMesh::generate(&field, 0.0, -2.0, 2.0, 0.25);
    assert!(mesh.triangle_count() > 0);

    let mut aligned = 0usize;
    let mut total = 0usize;
    for (tri, n) in mesh
        .vertices
        .chunks_exact(9)
        .zip(mesh.normals.chunks_exact(9))
    {
        let cx = (tri[0] + tri[3] + tri[6]) / 3.0;
        let cy = (tri[1] + tri[4] + tri[7]) / 3.0;
        let cz = (tri[2] + tri[5] + tri[8]) / 3.0;
        if n[0] == 0.0 && n[1] == 0.0 && n[2] == 0.0 {
            continue; // degenerate triangle, direction undefined
        }
        let dot = cx * n[0] + cy * n[1] + cz * n[2];
        total += 1;
        if dot > 0.0 {
            aligned += 1;
        }
    }
    // All non-degenerate triangles share one consistent orientation.
    assert_eq!(aligned, total);
}

#[test]
fn trig_field_pipeline_produces_consistent_buffers() {
    // The reference scene: cos(2x) - sin(2y) - sin(2z) at isovalue -1.5.
    let field = |x: f32, y: f32, z: f32| (x * 2.0).cos() - (y * 2.0).sin() - (z * 2.0).sin();
    let vertices = marching_cubes(&field, -1.5, -2.0, 2.0, 0.25);
    let normals = compute_normals(&vertices);

    assert!(!vertices.is_empty());
    assert_eq!(vertices.len() % 9, 0);
    assert_eq!(normals.len(), vertices.len());
}

#[test]
fn exported_ply_round_trips_the_vertex_count() {
    let field = |x: f32, y: f32, z: f32| x * x + y * y + z * z - 1.0;
    let mesh = TriangleMesh::generate(&field, 0.0, -2.0, 2.0, 0.5);
    assert!(mesh.vertex_count() > 0);

    let path = std::env::temp_dir().join(format!("isomesh-roundtrip-{}.ply", std::process::id()));
    write_ply(&mesh.vertices, &mesh.normals, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let declared: usize = contents
        .lines()
        .find_map(|l| l.strip_prefix("element vertex "))
        .expect("header missing element vertex line")
        .parse()
        .unwrap();
    assert_eq!(declared, mesh.vertices.len() / 3);

    let body_lines = contents
        .lines()
        .skip_while(|l| *l != "end_header")
        .skip(1)
        .count();
    assert_eq!(body_lines, declared);
}
