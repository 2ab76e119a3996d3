use std::path::Path;

use crate::{
    error::{MeshError, Result},
    export::write_ply,
    marching::marching_cubes,
    types::{ScalarField, Value, Vector},
};

/// Computes one flat-shaded normal per vertex.
///
/// `vertices` holds 9 floats per triangle (3 vertices × x, y, z). For each
/// triangle `v0, v1, v2` the face normal `normalize(cross(v1 - v0, v2 - v0))`
/// is written three times, so the result has exactly the input length.
///
/// Degenerate (zero-area) triangles get a zero normal rather than NaN;
/// consumers tolerate or filter these.
pub fn compute_normals(vertices: &[Value]) -> Vec<Value> {
    let mut normals = Vec::with_capacity(vertices.len());
    for tri in vertices.chunks_exact(9) {
        let v0 = Vector::new(tri[0], tri[1], tri[2]);
        let v1 = Vector::new(tri[3], tri[4], tri[5]);
        let v2 = Vector::new(tri[6], tri[7], tri[8]);

        let cross = (v1 - v0).cross(&(v2 - v0));
        let nrm = cross.norm();
        let normal = if nrm == 0.0 {
            Vector::new(0.0, 0.0, 0.0)
        } else {
            cross / nrm
        };

        // The face normal, once per vertex of the triangle.
        for _ in 0..3 {
            normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
        }
    }
    normals
}

/// A flat-shaded, non-welded triangle mesh.
///
/// Vertices are stored flat, every 3 floats one position and every 9 floats
/// one triangle; `normals` parallels `vertices` entry for entry. No index
/// buffer: each triangle owns three unshared vertices, which is exactly the
/// layout a renderer consumes as position/normal attribute streams.
#[derive(Clone, Debug, Default)]
pub struct TriangleMesh {
    /// Flat vertex positions: `[x, y, z, ...]`, 9 floats per triangle.
    pub vertices: Vec<Value>,
    /// Per-vertex face normals, same length as `vertices`.
    pub normals: Vec<Value>,
}

impl TriangleMesh {
    /// Builds a mesh from a flat vertex buffer, computing flat normals.
    ///
    /// Returns [`MeshError::RaggedTriangles`] if `vertices` is not a whole
    /// number of triangles.
    pub fn from_vertices(vertices: Vec<Value>) -> Result<Self> {
        if vertices.len() % 9 != 0 {
            return Err(MeshError::RaggedTriangles {
                len: vertices.len(),
            });
        }
        let normals = compute_normals(&vertices);
        Ok(Self { vertices, normals })
    }

    /// Runs the full extraction pipeline: march the field, then compute
    /// flat normals.
    pub fn generate(
        field: &ScalarField,
        isovalue: Value,
        min: Value,
        max: Value,
        stepsize: Value,
    ) -> Self {
        let vertices = marching_cubes(field, isovalue, min, max, stepsize);
        let normals = compute_normals(&vertices);
        Self { vertices, normals }
    }

    /// Number of vertices (positions) in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 9
    }

    /// Serializes the mesh to an ASCII PLY file at `path`.
    pub fn write_ply<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_ply(&self.vertices, &self.normals, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_triangle_normal_points_up_z() {
        let vertices = vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0,
        ];
        let normals = compute_normals(&vertices);
        assert_eq!(normals.len(), vertices.len());
        for n in normals.chunks_exact(3) {
            assert_eq!(n, &[0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn reversed_winding_flips_the_normal() {
        let vertices = vec![
            0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            1.0, 0.0, 0.0,
        ];
        let normals = compute_normals(&vertices);
        assert_eq!(&normals[0..3], &[0.0, 0.0, -1.0]);
    }

    #[test]
    fn degenerate_triangle_gets_zero_normal() {
        let vertices = vec![
            1.0, 1.0, 1.0, //
            1.0, 1.0, 1.0, //
            1.0, 1.0, 1.0,
        ];
        let normals = compute_normals(&vertices);
        assert_eq!(normals, vec![0.0; 9]);
    }

    #[test]
    fn normals_are_unit_length_for_generated_meshes() {
        let mesh = TriangleMesh::generate(
            &|x, y, z| x * x + y * y + z * z - 1.0,
            0.0,
            -2.0,
            2.0,
            0.5,
        );
        assert!(mesh.triangle_count() > 0);
        assert_eq!(mesh.normals.len(), mesh.vertices.len());
        for n in mesh.normals.chunks_exact(3) {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-4 || len == 0.0);
        }
    }

    #[test]
    fn ragged_vertex_buffer_is_rejected() {
        assert!(TriangleMesh::from_vertices(vec![0.0; 8]).is_err());
        assert!(TriangleMesh::from_vertices(vec![0.0; 9]).is_ok());
    }
}
