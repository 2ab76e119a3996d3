use crate::{
    interp::interpolate_vertex,
    tables::{CORNER_OFFSETS, EDGE_CONNECTIONS, EDGE_TABLE, TRI_TABLE},
    types::{Point, Value},
};

/// Returns the 8 world-space corner positions of the cell at `origin`.
///
/// Corners are the unit-cube offsets from [`CORNER_OFFSETS`] scaled by
/// `stepsize`:
///
/// ```text
///     4----5          Y
///    /|   /|          |
///   7----6 |          *-- X
///   | 0--|-1         /
///   |/   |/         Z
///   3----2
/// ```
#[inline]
pub fn corner_positions(origin: Point, stepsize: Value) -> [Point; 8] {
    CORNER_OFFSETS.map(|[dx, dy, dz]| {
        Point::new(
            origin.x + dx * stepsize,
            origin.y + dy * stepsize,
            origin.z + dz * stepsize,
        )
    })
}

/// Computes the 8-bit configuration index for a cell.
///
/// Bit `i` is set when corner `i`'s value is **strictly below** the isovalue.
/// A sample exactly equal to the isovalue counts as outside; this tie-break
/// selects the table row and must not be loosened to `<=`.
#[inline]
pub fn configuration_index(values: &[Value; 8], isovalue: Value) -> usize {
    let mut index = 0;
    for (i, &v) in values.iter().enumerate() {
        if v < isovalue {
            index |= 1 << i;
        }
    }
    index
}

/// Emits the triangles the isosurface cuts from a single cell.
///
/// `positions` and `values` are the cell's corner positions and field
/// samples in canonical corner order. Each triangle appends 9 floats
/// (3 vertices × x, y, z) to `out`, in the winding order given by
/// [`TRI_TABLE`]. Cells fully inside or outside the surface emit nothing.
pub fn march_cube(positions: &[Point; 8], values: &[Value; 8], isovalue: Value, out: &mut Vec<Value>) {
    let index = configuration_index(values, isovalue);

    let tri_edges = &TRI_TABLE[index];
    if tri_edges[0] == -1 {
        return;
    }

    // Crossing points for the edges flagged active by EDGE_TABLE.
    let edges_mask = EDGE_TABLE[index];
    let mut edge_points: [Option<Point>; 12] = [None; 12];
    for (i, point) in edge_points.iter_mut().enumerate() {
        if edges_mask & (1 << i) == 0 {
            continue;
        }
        let [c0, c1] = EDGE_CONNECTIONS[i];
        *point = Some(interpolate_vertex(
            positions[c0],
            positions[c1],
            values[c0],
            values[c1],
            isovalue,
        ));
    }

    for &edge in tri_edges.iter().take_while(|&&e| e != -1) {
        // TRI_TABLE only references edges present in the mask.
        let p = edge_points[edge as usize].expect("edge crossing missing");
        out.extend_from_slice(&[p.x, p.y, p.z]);
    }
}
