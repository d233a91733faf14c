//! Runtime-width bridge to the kiddo k-d tree.
//!
//! kiddo fixes the point width at compile time via a const generic. The
//! number of coordinate fields is only known at runtime, so [`PointTree`]
//! carries one tree instantiation per supported width and dispatches on
//! construction.

use std::fmt;

use kiddo::traits::DistanceMetric;
use kiddo::{ImmutableKdTree, Manhattan, SquaredEuclidean};
use ndarray::{Array2, ArrayView1, Axis};

use crate::config::Metric;
use crate::error::IndexError;

/// Widest supported coordinate point (number of fields per grid cell).
pub const MAX_FIELDS: usize = 8;

/// Chebyshev (L-infinity) metric for kiddo: the largest absolute
/// per-coordinate difference.
pub(crate) struct Chebyshev;

impl<const K: usize> DistanceMetric<f64, K> for Chebyshev {
    fn dist(a: &[f64; K], b: &[f64; K]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }

    fn dist1(a: f64, b: f64) -> f64 {
        (a - b).abs()
    }
}

macro_rules! point_tree {
    ($($variant:ident => $k:literal),+ $(,)?) => {
        /// Nearest-neighbor search structure over points of runtime-known
        /// width, one enum variant per supported width.
        pub(crate) enum PointTree {
            $($variant(ImmutableKdTree<f64, $k>),)+
        }

        impl PointTree {
            /// Builds a tree over the rows of an `(n_cells, n_fields)`
            /// point matrix.
            ///
            /// # Errors
            ///
            /// Returns [`IndexError::UnsupportedFieldCount`] when the column
            /// count is zero or above [`MAX_FIELDS`].
            pub(crate) fn build(points: &Array2<f64>) -> Result<Self, IndexError> {
                match points.ncols() {
                    $($k => Ok(Self::$variant(build_tree::<$k>(points))),)+
                    got => Err(IndexError::UnsupportedFieldCount {
                        got,
                        max: MAX_FIELDS,
                    }),
                }
            }

            /// Returns the flat index of the stored point nearest to
            /// `point` under `metric`.
            ///
            /// # Panics
            ///
            /// Debug-asserts that `point.len()` equals the tree width.
            pub(crate) fn nearest(&self, point: ArrayView1<'_, f64>, metric: Metric) -> usize {
                match self {
                    $(Self::$variant(tree) => nearest_in::<$k>(tree, point, metric),)+
                }
            }

            /// Returns the point width the tree was built for.
            pub(crate) fn width(&self) -> usize {
                match self {
                    $(Self::$variant(_) => $k,)+
                }
            }
        }
    };
}

point_tree! {
    W1 => 1,
    W2 => 2,
    W3 => 3,
    W4 => 4,
    W5 => 5,
    W6 => 6,
    W7 => 7,
    W8 => 8,
}

impl fmt::Debug for PointTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointTree")
            .field("width", &self.width())
            .finish()
    }
}

/// Copies matrix rows into fixed-width points and hands them to kiddo.
///
/// Item `i` of the resulting tree is row `i` of the matrix.
fn build_tree<const K: usize>(points: &Array2<f64>) -> ImmutableKdTree<f64, K> {
    let mut rows: Vec<[f64; K]> = Vec::with_capacity(points.nrows());
    for row in points.axis_iter(Axis(0)) {
        let mut p = [0.0; K];
        for (slot, &value) in p.iter_mut().zip(row.iter()) {
            *slot = value;
        }
        rows.push(p);
    }
    ImmutableKdTree::new_from_slice(&rows)
}

fn nearest_in<const K: usize>(
    tree: &ImmutableKdTree<f64, K>,
    point: ArrayView1<'_, f64>,
    metric: Metric,
) -> usize {
    debug_assert_eq!(point.len(), K);
    let mut query = [0.0; K];
    for (slot, &value) in query.iter_mut().zip(point.iter()) {
        *slot = value;
    }

    let neighbour = match metric {
        Metric::Euclidean => tree.nearest_one::<SquaredEuclidean>(&query),
        Metric::Manhattan => tree.nearest_one::<Manhattan>(&query),
        Metric::Chebyshev => tree.nearest_one::<Chebyshev>(&query),
    };
    neighbour.item as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array2};

    #[test]
    fn test_build_and_nearest_2d() {
        // Three points on a line: (0,0), (1,1), (2,2)
        let points = array![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];
        let tree = PointTree::build(&points).unwrap();
        assert_eq!(tree.width(), 2);

        let query = array![0.9, 1.1];
        assert_eq!(tree.nearest(query.view(), Metric::Euclidean), 1);

        let query = array![1.8, 2.3];
        assert_eq!(tree.nearest(query.view(), Metric::Euclidean), 2);
    }

    #[test]
    fn test_exact_hit_returns_that_point() {
        let points = array![[0.0], [1.0], [2.0], [3.0]];
        let tree = PointTree::build(&points).unwrap();
        for i in 0..4 {
            let query = array![i as f64];
            assert_eq!(tree.nearest(query.view(), Metric::Euclidean), i);
        }
    }

    #[test]
    fn test_width_zero_rejected() {
        let points = Array2::<f64>::zeros((4, 0));
        let result = PointTree::build(&points);
        assert!(matches!(
            result,
            Err(IndexError::UnsupportedFieldCount { got: 0, max: MAX_FIELDS })
        ));
    }

    #[test]
    fn test_width_above_max_rejected() {
        let points = Array2::<f64>::zeros((4, MAX_FIELDS + 1));
        let result = PointTree::build(&points);
        assert!(matches!(
            result,
            Err(IndexError::UnsupportedFieldCount { got: 9, max: MAX_FIELDS })
        ));
    }

    #[test]
    fn test_all_supported_widths_build() {
        for width in 1..=MAX_FIELDS {
            let points = Array2::<f64>::zeros((3, width));
            let tree = PointTree::build(&points).unwrap();
            assert_eq!(tree.width(), width);
        }
    }

    #[test]
    fn test_metrics_disagree() {
        // Point 0 = (1.2, 0.0), point 1 = (0.9, 0.9). From the origin:
        //   Euclidean: 1.44 vs 1.62 -> point 0
        //   Manhattan: 1.2 vs 1.8  -> point 0
        //   Chebyshev: 1.2 vs 0.9  -> point 1
        let points = array![[1.2, 0.0], [0.9, 0.9]];
        let tree = PointTree::build(&points).unwrap();
        let origin = array![0.0, 0.0];

        assert_eq!(tree.nearest(origin.view(), Metric::Euclidean), 0);
        assert_eq!(tree.nearest(origin.view(), Metric::Manhattan), 0);
        assert_eq!(tree.nearest(origin.view(), Metric::Chebyshev), 1);
    }

    #[test]
    fn test_chebyshev_dist_hand_computed() {
        let d = <Chebyshev as DistanceMetric<f64, 3>>::dist(
            &[0.0, 2.0, -1.0],
            &[1.0, -0.5, -1.0],
        );
        assert_abs_diff_eq!(d, 2.5, epsilon = 1e-12);

        let d1 = <Chebyshev as DistanceMetric<f64, 3>>::dist1(4.0, 6.5);
        assert_abs_diff_eq!(d1, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_debug_shows_width() {
        let points = Array2::<f64>::zeros((2, 3));
        let tree = PointTree::build(&points).unwrap();
        assert_eq!(format!("{tree:?}"), "PointTree { width: 3 }");
    }
}
