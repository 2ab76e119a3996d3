use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, MeshError>;

#[derive(Debug, Display, From)]
#[display("{self:?}")]
pub enum MeshError {
    /// Vertex and normal buffers passed to export differ in length.
    MismatchedNormals { vertices: usize, normals: usize },
    /// Flat vertex buffer length is not a multiple of 9 (3 vertices × 3 components).
    RaggedTriangles { len: usize },
    Io(std::io::Error),
}

impl std::error::Error for MeshError {}
