//! Point-matrix construction and flat-index unraveling.

use ndarray::{Array1, Array2, ArrayD};

/// Stacks per-field coordinate grids into an `(n_cells, n_fields)` point
/// matrix.
///
/// Cell order is the grids' logical row-major order, so row `i` of the
/// result is the coordinate tuple of flat cell `i`.
///
/// # Panics
///
/// Debug-asserts that every grid has the same number of cells.
pub(crate) fn stack_grids(grids: &[&ArrayD<f64>]) -> Array2<f64> {
    let n_cells = grids.first().map_or(0, |g| g.len());
    debug_assert!(grids.iter().all(|g| g.len() == n_cells));

    let mut points = Array2::zeros((n_cells, grids.len()));
    for (field, grid) in grids.iter().enumerate() {
        for (cell, &value) in grid.iter().enumerate() {
            points[(cell, field)] = value;
        }
    }
    points
}

/// Stacks per-field query values into an `(n_points, n_fields)` point
/// matrix, one column per field in slice order.
///
/// # Panics
///
/// Debug-asserts that every column has the same length.
pub(crate) fn stack_columns(columns: &[&Array1<f64>]) -> Array2<f64> {
    let n_points = columns.first().map_or(0, |c| c.len());
    debug_assert!(columns.iter().all(|c| c.len() == n_points));

    let mut points = Array2::zeros((n_points, columns.len()));
    for (field, column) in columns.iter().enumerate() {
        for (row, &value) in column.iter().enumerate() {
            points[(row, field)] = value;
        }
    }
    points
}

/// Converts a flat row-major cell index into per-axis grid coordinates.
///
/// Inverse of the flattening applied by [`stack_grids`]: the last axis
/// varies fastest.
///
/// # Panics
///
/// Debug-asserts that `flat` is within the grid.
pub(crate) fn unravel_index(flat: usize, shape: &[usize]) -> Vec<usize> {
    let mut coords = vec![0; shape.len()];
    let mut rest = flat;
    for (axis, &extent) in shape.iter().enumerate().rev() {
        coords[axis] = rest % extent;
        rest /= extent;
    }
    debug_assert_eq!(rest, 0, "flat index {flat} out of range for {shape:?}");
    coords
}
