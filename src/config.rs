//! Configuration for coordinate index queries.

/// Distance metric used to resolve query points to their nearest grid point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Metric {
    /// Straight-line (L2) distance.
    #[default]
    Euclidean,
    /// City-block (L1) distance: sum of absolute coordinate differences.
    Manhattan,
    /// Chessboard (L-infinity) distance: largest absolute coordinate
    /// difference.
    Chebyshev,
}

/// Configuration for a [`CoordinateIndex`](crate::CoordinateIndex).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use coordsel::{IndexConfig, Metric};
///
/// let config = IndexConfig::new().with_metric(Metric::Manhattan);
/// assert_eq!(config.metric(), Metric::Manhattan);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexConfig {
    /// Distance metric for nearest-point queries.
    metric: Metric,
}

impl IndexConfig {
    /// Creates a new configuration.
    ///
    /// Defaults: `metric = Euclidean`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Returns the distance metric.
    pub fn metric(&self) -> Metric {
        self.metric
    }
}
