//! Isosurface extraction via marching cubes.
//!
//! Samples a caller-supplied scalar field over a regular grid, emits a
//! flat-shaded triangle mesh at a chosen isovalue, computes per-triangle
//! normals, and exports the result as ASCII PLY. The vertex and normal
//! buffers are plain contiguous `f32` arrays, ready for direct upload as
//! position and normal vertex attributes.
//!
//! ```no_run
//! use isomesh::TriangleMesh;
//!
//! let sphere = |x: f32, y: f32, z: f32| x * x + y * y + z * z - 1.0;
//! let mesh = TriangleMesh::generate(&sphere, 0.0, -2.0, 2.0, 0.1);
//! mesh.write_ply("sphere.ply").unwrap();
//! ```

pub mod cube;
pub mod error;
pub mod export;
pub mod interp;
pub mod marching;
pub mod mesh;
pub mod tables;
pub mod types;

pub use error::{MeshError, Result};
pub use export::write_ply;
pub use marching::marching_cubes;
pub use mesh::{compute_normals, TriangleMesh};
pub use types::{Point, ScalarField, Value, Vector};
