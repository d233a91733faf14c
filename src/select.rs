//! Named selection and positional indexer output.

use indexmap::IndexMap;
use ndarray::Array1;
use tracing::debug;

use crate::error::IndexError;
use crate::index::CoordinateIndex;
use crate::points::stack_columns;

/// Integer positions along one grid dimension, one entry per query point,
/// laid out along the synthetic query-point dimension.
///
/// Consumable by a positional-selection mechanism: indexing each grid
/// dimension with its indexer picks the grid cell nearest to each query
/// point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionIndexer {
    values: Array1<usize>,
}

impl PositionIndexer {
    /// Name of the synthetic dimension the positions are laid out along.
    pub const DIM: &'static str = "points";

    pub(crate) fn new(values: Array1<usize>) -> Self {
        Self { values }
    }

    /// Returns the integer positions, one per query point.
    pub fn values(&self) -> &Array1<usize> {
        &self.values
    }

    /// Returns the name of the indexer's axis.
    pub fn dim(&self) -> &'static str {
        Self::DIM
    }

    /// Returns the number of query points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the indexer covers no query points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl CoordinateIndex {
    /// Resolves named query values to per-dimension positional indexers.
    ///
    /// `indexers` maps each coordinate field name to its query values; all
    /// fields must be present and of equal length. Values are stacked into
    /// one point per entry (in stored field order), resolved via
    /// [`query`](CoordinateIndex::query), and returned as one
    /// [`PositionIndexer`] per grid dimension, keyed by dimension name in
    /// grid order.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::UnknownFields`] when `indexers` contains names
    /// that are not indexed (all offenders listed, sorted),
    /// [`IndexError::MissingFields`] when an indexed field has no query
    /// values, and [`IndexError::QueryLengthMismatch`] when the per-field
    /// value arrays disagree in length.
    #[tracing::instrument(skip(self, indexers), fields(n_fields = indexers.len()))]
    pub fn select(
        &self,
        indexers: &IndexMap<String, Array1<f64>>,
    ) -> Result<IndexMap<String, PositionIndexer>, IndexError> {
        let mut unknown: Vec<String> = indexers
            .keys()
            .filter(|name| !self.names().iter().any(|n| n == *name))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            unknown.sort();
            return Err(IndexError::UnknownFields { names: unknown });
        }

        let mut columns: Vec<&Array1<f64>> = Vec::with_capacity(self.num_fields());
        let mut missing: Vec<String> = Vec::new();
        for name in self.names() {
            match indexers.get(name) {
                Some(values) => columns.push(values),
                None => missing.push(name.clone()),
            }
        }
        if !missing.is_empty() {
            return Err(IndexError::MissingFields { names: missing });
        }

        let n_points = columns[0].len();
        for (name, values) in self.names().iter().zip(&columns) {
            if values.len() != n_points {
                return Err(IndexError::QueryLengthMismatch {
                    field: name.clone(),
                    expected: n_points,
                    got: values.len(),
                });
            }
        }

        let points = stack_columns(&columns);
        let per_dim = self.query(&points)?;

        debug!(n_points, "resolved selection to grid positions");

        Ok(self
            .dims()
            .iter()
            .cloned()
            .zip(per_dim.into_iter().map(PositionIndexer::new))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_indexer_accessors() {
        let indexer = PositionIndexer::new(array![0, 2, 1]);
        assert_eq!(indexer.values().to_vec(), vec![0, 2, 1]);
        assert_eq!(indexer.dim(), "points");
        assert_eq!(indexer.len(), 3);
        assert!(!indexer.is_empty());
    }

    #[test]
    fn test_indexer_empty() {
        let indexer = PositionIndexer::new(Array1::<usize>::zeros(0));
        assert_eq!(indexer.len(), 0);
        assert!(indexer.is_empty());
    }
}
