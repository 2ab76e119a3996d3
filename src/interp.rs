use crate::types::{Point, Value};

/// Return the interpolation factor t corresponding to iso_val.
///
/// No clamping: if `v0 == v1` the result is non-finite, and if the endpoints
/// do not straddle `iso_val` the factor falls outside `[0, 1]`. Callers only
/// invoke this on edges the lookup table flags as crossed, where the factor
/// is well defined; results for any other edge are discarded.
#[inline]
pub fn find_t(v0: Value, v1: Value, iso_val: Value) -> Value {
    (iso_val - v0) / (v1 - v0)
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: Value, b: Value, t: Value) -> Value {
    a + (b - a) * t
}

/// Locates the isosurface crossing on the edge `p1 -> p2`.
///
/// `valp1` and `valp2` are the field samples at the endpoints. The crossing
/// is estimated by linear interpolation: `p1 + t * (p2 - p1)` with
/// `t = (isovalue - valp1) / (valp2 - valp1)`.
#[inline]
pub fn interpolate_vertex(p1: Point, p2: Point, valp1: Value, valp2: Value, isovalue: Value) -> Point {
    let t = find_t(valp1, valp2, isovalue);
    Point::new(
        lerp(p1.x, p2.x, t),
        lerp(p1.y, p2.y, t),
        lerp(p1.z, p2.z, t),
    )
}
