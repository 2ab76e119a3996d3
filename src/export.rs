use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;

use crate::{
    error::{MeshError, Result},
    types::Value,
};

/// Writes vertices and flat normals to an ASCII PLY file.
///
/// The header declares `vertices.len() / 3` elements with six float
/// properties (`x y z nx ny nz`), followed by one line per vertex.
///
/// Nothing is written unless the output file can be opened; an open failure
/// comes back as [`MeshError::Io`] and the generated mesh is untouched.
/// Returns [`MeshError::MismatchedNormals`] when the two buffers differ in
/// length.
pub fn write_ply<P: AsRef<Path>>(vertices: &[Value], normals: &[Value], path: P) -> Result<()> {
    if vertices.len() != normals.len() {
        return Err(MeshError::MismatchedNormals {
            vertices: vertices.len(),
            normals: normals.len(),
        });
    }

    let path = path.as_ref();
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    let num_vertices = vertices.len() / 3;
    writeln!(w, "ply")?;
    writeln!(w, "format ascii 1.0")?;
    writeln!(w, "element vertex {num_vertices}")?;
    writeln!(w, "property float x")?;
    writeln!(w, "property float y")?;
    writeln!(w, "property float z")?;
    writeln!(w, "property float nx")?;
    writeln!(w, "property float ny")?;
    writeln!(w, "property float nz")?;
    writeln!(w, "end_header")?;

    for (v, n) in vertices.chunks_exact(3).zip(normals.chunks_exact(3)) {
        writeln!(w, "{} {} {} {} {} {}", v[0], v[1], v[2], n[0], n[1], n[2])?;
    }
    w.flush()?;

    info!("wrote {} with {num_vertices} vertices", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("isomesh-{}-{name}", std::process::id()))
    }

    #[test]
    fn header_reports_vertex_count() {
        let vertices = vec![0.0; 18]; // two triangles
        let normals = vec![0.0; 18];
        let path = scratch_path("header.ply");
        write_ply(&vertices, &normals, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("ply"));
        assert_eq!(lines.next(), Some("format ascii 1.0"));
        assert_eq!(lines.next(), Some("element vertex 6"));
        assert_eq!(contents.lines().filter(|l| l.starts_with("property")).count(), 6);

        let body: Vec<&str> = contents
            .lines()
            .skip_while(|l| *l != "end_header")
            .skip(1)
            .collect();
        assert_eq!(body.len(), 6);
        for line in body {
            assert_eq!(line.split_whitespace().count(), 6);
        }
    }

    #[test]
    fn mismatched_buffers_are_rejected_before_any_io() {
        let path = scratch_path("mismatch.ply");
        let err = write_ply(&[0.0; 9], &[0.0; 6], &path);
        assert!(matches!(err, Err(MeshError::MismatchedNormals { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn unopenable_path_reports_io_error() {
        let err = write_ply(&[0.0; 9], &[0.0; 9], "/definitely/not/a/dir/out.ply");
        assert!(matches!(err, Err(MeshError::Io(_))));
    }
}
