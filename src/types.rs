use nalgebra::{Point3, Vector3};

/// Scalar field value at a point in space.
pub type Value = f32;

/// A 3D point with [`Value`] components.
pub type Point = Point3<Value>;

/// A 3D vector with [`Value`] components.
pub type Vector = Vector3<Value>;

/// A scalar field: maps a point `(x, y, z)` to a [`Value`].
///
/// Must be pure and deterministic: it is evaluated at arbitrary points, any
/// number of times, in any order, possibly from worker threads (hence `Sync`).
///
/// Values **strictly below** the isovalue are considered "inside" the surface.
pub type ScalarField = dyn Fn(Value, Value, Value) -> Value + Sync;
