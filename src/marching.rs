use log::{debug, warn};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
    cube::{corner_positions, march_cube},
    types::{Point, ScalarField, Value},
};

/// Extracts the isosurface `field == isovalue` over the cube `[min, max]^3`.
///
/// Cell origins step from `min` while strictly below `max` on each axis, by
/// floating-point accumulation of `stepsize`. Whether a thin final slice at
/// the `max` boundary is visited therefore depends on rounding; this matches
/// the reference sampling behaviour and is deliberately not normalised to an
/// integer cell count.
///
/// Returns a flat vertex buffer, 9 floats per triangle. Cells are mutually
/// independent, so X slices are marched on the Rayon pool and merged in
/// X order; the output is identical to a sequential x-outer, y-middle,
/// z-inner traversal.
///
/// A degenerate domain (`max <= min`) yields an empty buffer. A non-positive
/// `stepsize` would never terminate, so it is refused (with a warning) and
/// also yields an empty buffer.
pub fn marching_cubes(
    field: &ScalarField,
    isovalue: Value,
    min: Value,
    max: Value,
    stepsize: Value,
) -> Vec<Value> {
    if stepsize <= 0.0 || !stepsize.is_finite() {
        warn!("refusing to march with stepsize {stepsize}");
        return Vec::new();
    }

    let origins = axis_origins(min, max, stepsize);
    let slice_count = origins.len();

    let per_x: Vec<Vec<Value>> = origins
        .into_par_iter()
        .map(|x| {
            let mut local: Vec<Value> = Vec::new();
            let mut y = min;
            while y < max {
                let mut z = min;
                while z < max {
                    let positions = corner_positions(Point::new(x, y, z), stepsize);
                    let values =
                        positions.map(|p| field(p.x, p.y, p.z));
                    march_cube(&positions, &values, isovalue, &mut local);
                    z += stepsize;
                }
                y += stepsize;
            }
            local
        })
        .collect();

    let total: usize = per_x.iter().map(|v| v.len()).sum();
    let mut vertices: Vec<Value> = Vec::with_capacity(total);
    for mut v in per_x {
        vertices.append(&mut v);
    }

    debug!(
        "marched {slice_count} slices at step {stepsize}: {} triangles",
        vertices.len() / 9
    );

    vertices
}

/// Cell origins along one axis: `min`, `min + stepsize`, ... while `< max`.
fn axis_origins(min: Value, max: Value, stepsize: Value) -> Vec<Value> {
    let mut origins = Vec::new();
    let mut x = min;
    while x < max {
        origins.push(x);
        x += stepsize;
    }
    origins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_field_below_isovalue_yields_empty_mesh() {
        let vertices = marching_cubes(&|_, _, _| -1.0, 0.0, 0.0, 2.0, 1.0);
        assert!(vertices.is_empty());
    }

    #[test]
    fn constant_field_above_isovalue_yields_empty_mesh() {
        let vertices = marching_cubes(&|_, _, _| 1.0, 0.0, 2.0, 2.0, 1.0);
        assert!(vertices.is_empty());
    }

    #[test]
    fn degenerate_domain_yields_empty_mesh() {
        let vertices = marching_cubes(&|x, _, _| x, 0.0, 1.0, -1.0, 0.25);
        assert!(vertices.is_empty());
    }

    #[test]
    fn non_positive_stepsize_is_refused() {
        assert!(marching_cubes(&|x, _, _| x, 0.0, -1.0, 1.0, 0.0).is_empty());
        assert!(marching_cubes(&|x, _, _| x, 0.0, -1.0, 1.0, -0.5).is_empty());
    }

    #[test]
    fn single_cell_axis_crossing_stays_in_bounds() {
        // One cell, surface crossing along X only: x - 0.5 flips sign inside
        // the cell while Y and Z never do.
        let vertices = marching_cubes(&|x, _, _| x - 0.5, 0.0, 0.0, 1.0, 1.0);
        assert!(!vertices.is_empty());
        assert_eq!(vertices.len() % 9, 0);
        for v in vertices.chunks_exact(3) {
            for c in v {
                assert!((0.0..=1.0).contains(c), "vertex {v:?} outside the cell");
            }
        }
        // Crossing plane is x = 0.5.
        for v in vertices.chunks_exact(3) {
            assert!((v[0] - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn axis_origins_stop_strictly_below_max() {
        let origins = axis_origins(0.0, 1.0, 0.25);
        assert_eq!(origins, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn parallel_merge_preserves_traversal_order() {
        let field = |x: Value, y: Value, z: Value| {
            (x * 0.7).cos() - (y * 0.9).sin() + (z * 0.4).sin() - 0.2
        };
        let a = marching_cubes(&field, 0.0, -2.0, 2.0, 0.5);
        let b = marching_cubes(&field, 0.0, -2.0, 2.0, 0.5);
        assert_eq!(a, b);
    }
}
