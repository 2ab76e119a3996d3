//! Extracts the reference trigonometric field and writes `output.ply`.

use isomesh::TriangleMesh;

fn main() -> isomesh::Result<()> {
    env_logger::init();

    let field = |x: f32, y: f32, z: f32| (x * 2.0).cos() - (y * 2.0).sin() - (z * 2.0).sin();

    let isovalue = -1.5;
    let min = -5.0;
    let max = 5.0;
    let step = 0.2;

    let mesh = TriangleMesh::generate(&field, isovalue, min, max, step);
    println!(
        "extracted {} triangles ({} vertices)",
        mesh.triangle_count(),
        mesh.vertex_count()
    );

    mesh.write_ply("output.ply")?;
    Ok(())
}
