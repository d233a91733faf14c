//! Labeled multidimensional coordinate arrays.

use ndarray::ArrayD;

use crate::error::IndexError;

/// A coordinate variable: an n-dimensional array of scalar values with one
/// label per axis.
///
/// Each variable describes one coordinate field of a grid (e.g. the
/// longitude of every cell). All variables handed to an index must agree on
/// both labels and extents.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Dimension labels, one per array axis.
    dims: Vec<String>,
    /// Coordinate values over the grid.
    data: ArrayD<f64>,
}

impl Variable {
    /// Creates a variable from dimension labels and grid data.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::DimsRankMismatch`] when the number of labels
    /// does not equal the array rank.
    pub fn new<S: Into<String>>(dims: Vec<S>, data: ArrayD<f64>) -> Result<Self, IndexError> {
        let dims: Vec<String> = dims.into_iter().map(Into::into).collect();
        if dims.len() != data.ndim() {
            return Err(IndexError::DimsRankMismatch {
                dims: dims.len(),
                ndim: data.ndim(),
            });
        }
        Ok(Self { dims, data })
    }

    /// Returns the dimension labels.
    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    /// Returns the coordinate values.
    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    /// Returns the grid shape.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Returns the number of axes.
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Returns the number of grid cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` when the variable holds no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
