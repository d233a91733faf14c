//! Coordinate index construction and nearest-point queries.

use indexmap::IndexMap;
use ndarray::{Array1, Array2, ArrayD, Axis};
use tracing::debug;

use crate::config::IndexConfig;
use crate::error::IndexError;
use crate::points::{stack_grids, unravel_index};
use crate::select::PositionIndexer;
use crate::tree::{PointTree, MAX_FIELDS};
use crate::variable::Variable;

/// The fixed method set a pluggable coordinate index exposes to its host
/// framework: construction from named coordinate variables, and selection
/// given per-field query values.
pub trait GridIndex: Sized {
    /// Builds the index from named coordinate variables.
    fn from_variables(
        variables: &IndexMap<String, Variable>,
        config: &IndexConfig,
    ) -> Result<Self, IndexError>;

    /// Resolves per-field query values to per-dimension positional indexers.
    fn select(
        &self,
        indexers: &IndexMap<String, Array1<f64>>,
    ) -> Result<IndexMap<String, PositionIndexer>, IndexError>;
}

/// Nearest-neighbor lookup structure over a set of named coordinate grids.
///
/// Built once from coordinate variables that share dimension labels and
/// shape; immutable thereafter. Queries resolve arbitrary coordinate tuples
/// to the grid position of the closest stored point — always the closest,
/// however far away.
#[derive(Debug)]
pub struct CoordinateIndex {
    /// Coordinate field names, in insertion order.
    names: Vec<String>,
    /// Dimension labels shared by all coordinate grids.
    dims: Vec<String>,
    /// Grid shape, one extent per dimension label.
    shape: Vec<usize>,
    /// Number of indexed grid cells.
    n_cells: usize,
    /// Spatial index over the flattened coordinate points.
    tree: PointTree,
    /// Query configuration.
    config: IndexConfig,
}

impl CoordinateIndex {
    /// Builds an index from named coordinate variables.
    ///
    /// The variables are stacked along a new trailing axis into one point
    /// per grid cell, flattened in row-major order, and handed to the
    /// spatial index. Field order is the map's insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::UnsupportedFieldCount`] for zero or more than
    /// [`MAX_FIELDS`] variables, [`IndexError::DimensionMismatch`] /
    /// [`IndexError::ShapeMismatch`] when the variables do not agree on one
    /// dimension-label set and shape, and [`IndexError::EmptyGrid`] when
    /// the grids hold no cells.
    #[tracing::instrument(skip(variables, config), fields(n_fields = variables.len()))]
    pub fn from_variables(
        variables: &IndexMap<String, Variable>,
        config: &IndexConfig,
    ) -> Result<Self, IndexError> {
        let Some((_, first)) = variables.first() else {
            return Err(IndexError::UnsupportedFieldCount {
                got: 0,
                max: MAX_FIELDS,
            });
        };
        if variables.len() > MAX_FIELDS {
            return Err(IndexError::UnsupportedFieldCount {
                got: variables.len(),
                max: MAX_FIELDS,
            });
        }
        for (name, var) in variables {
            if var.dims() != first.dims() {
                return Err(IndexError::DimensionMismatch {
                    field: name.clone(),
                    expected: first.dims().to_vec(),
                    got: var.dims().to_vec(),
                });
            }
            if var.shape() != first.shape() {
                return Err(IndexError::ShapeMismatch {
                    field: name.clone(),
                    expected: first.shape().to_vec(),
                    got: var.shape().to_vec(),
                });
            }
        }

        let n_cells = first.len();
        if n_cells == 0 {
            return Err(IndexError::EmptyGrid);
        }

        let grids: Vec<&ArrayD<f64>> = variables.values().map(Variable::data).collect();
        let points = stack_grids(&grids);
        let tree = PointTree::build(&points)?;

        debug!(n_cells, n_fields = variables.len(), "built coordinate index");

        Ok(Self {
            names: variables.keys().cloned().collect(),
            dims: first.dims().to_vec(),
            shape: first.shape().to_vec(),
            n_cells,
            tree,
            config: config.clone(),
        })
    }

    /// Resolves query points to multi-dimensional grid positions.
    ///
    /// `points` has one row per query point and one column per coordinate
    /// field, in field order. Each row is resolved to the flat index of the
    /// nearest stored point, then unraveled over the grid shape.
    ///
    /// Returns one integer position array per grid dimension, each of
    /// length `points.nrows()`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::PointWidthMismatch`] when the column count
    /// does not equal the field count.
    pub fn query(&self, points: &Array2<f64>) -> Result<Vec<Array1<usize>>, IndexError> {
        if points.ncols() != self.names.len() {
            return Err(IndexError::PointWidthMismatch {
                got: points.ncols(),
                expected: self.names.len(),
            });
        }

        let n_points = points.nrows();
        let mut per_dim: Vec<Vec<usize>> = vec![Vec::with_capacity(n_points); self.dims.len()];
        for row in points.axis_iter(Axis(0)) {
            let flat = self.tree.nearest(row, self.config.metric());
            for (axis, coord) in unravel_index(flat, &self.shape).into_iter().enumerate() {
                per_dim[axis].push(coord);
            }
        }

        Ok(per_dim.into_iter().map(Array1::from_vec).collect())
    }

    /// Returns the coordinate field names, in field order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the dimension labels shared by the coordinate grids.
    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    /// Returns the grid shape.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the number of coordinate fields.
    pub fn num_fields(&self) -> usize {
        self.names.len()
    }

    /// Returns the number of indexed grid cells.
    pub fn num_points(&self) -> usize {
        self.n_cells
    }

    /// Returns the query configuration the index was built with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }
}

impl GridIndex for CoordinateIndex {
    fn from_variables(
        variables: &IndexMap<String, Variable>,
        config: &IndexConfig,
    ) -> Result<Self, IndexError> {
        CoordinateIndex::from_variables(variables, config)
    }

    fn select(
        &self,
        indexers: &IndexMap<String, Array1<f64>>,
    ) -> Result<IndexMap<String, PositionIndexer>, IndexError> {
        CoordinateIndex::select(self, indexers)
    }
}
