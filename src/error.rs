//! Error types for the coordsel crate.

/// Error type for all fallible operations in the coordsel crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IndexError {
    /// Returned when a variable's dimension labels do not match its array rank.
    #[error("{dims} dimension labels do not match array rank {ndim}")]
    DimsRankMismatch {
        /// Number of dimension labels supplied.
        dims: usize,
        /// Rank of the supplied array.
        ndim: usize,
    },

    /// Returned when the number of coordinate fields is zero or exceeds the
    /// widest supported point width.
    #[error("unsupported coordinate field count {got}, supported range is 1..={max}")]
    UnsupportedFieldCount {
        /// Number of coordinate fields supplied.
        got: usize,
        /// Widest supported point width.
        max: usize,
    },

    /// Returned when coordinate variables do not all share one set of
    /// dimension labels.
    #[error("variable '{field}' has dimensions {got:?}, expected {expected:?}")]
    DimensionMismatch {
        /// Name of the offending variable.
        field: String,
        /// Dimension labels of the first variable.
        expected: Vec<String>,
        /// Dimension labels of the offending variable.
        got: Vec<String>,
    },

    /// Returned when coordinate variables share dimension labels but not
    /// extents.
    #[error("variable '{field}' has shape {got:?}, expected {expected:?}")]
    ShapeMismatch {
        /// Name of the offending variable.
        field: String,
        /// Shape of the first variable.
        expected: Vec<usize>,
        /// Shape of the offending variable.
        got: Vec<usize>,
    },

    /// Returned when the coordinate grids contain no cells.
    #[error("coordinate grids contain no cells")]
    EmptyGrid,

    /// Returned when query points do not have one column per coordinate field.
    #[error("query points have width {got}, expected {expected}")]
    PointWidthMismatch {
        /// Column count of the supplied query points.
        got: usize,
        /// Number of indexed coordinate fields.
        expected: usize,
    },

    /// Returned when selection receives field names that are not indexed.
    #[error("unknown coordinate fields: {names:?}")]
    UnknownFields {
        /// The unrecognized field names, sorted.
        names: Vec<String>,
    },

    /// Returned when selection lacks values for indexed fields.
    #[error("missing coordinate fields: {names:?}")]
    MissingFields {
        /// The absent field names, in field order.
        names: Vec<String>,
    },

    /// Returned when per-field query values disagree in length.
    #[error("query values for '{field}' have length {got}, expected {expected}")]
    QueryLengthMismatch {
        /// Name of the offending field.
        field: String,
        /// Length of the first field's query values.
        expected: usize,
        /// Length of the offending field's query values.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_dims_rank_mismatch() {
        let e = IndexError::DimsRankMismatch { dims: 3, ndim: 2 };
        assert_eq!(e.to_string(), "3 dimension labels do not match array rank 2");
    }

    #[test]
    fn error_unsupported_field_count() {
        let e = IndexError::UnsupportedFieldCount { got: 9, max: 8 };
        assert_eq!(
            e.to_string(),
            "unsupported coordinate field count 9, supported range is 1..=8"
        );
    }

    #[test]
    fn error_dimension_mismatch() {
        let e = IndexError::DimensionMismatch {
            field: "y".to_string(),
            expected: vec!["row".to_string(), "col".to_string()],
            got: vec!["time".to_string()],
        };
        assert_eq!(
            e.to_string(),
            "variable 'y' has dimensions [\"time\"], expected [\"row\", \"col\"]"
        );
    }

    #[test]
    fn error_shape_mismatch() {
        let e = IndexError::ShapeMismatch {
            field: "y".to_string(),
            expected: vec![3, 3],
            got: vec![3, 4],
        };
        assert_eq!(e.to_string(), "variable 'y' has shape [3, 4], expected [3, 3]");
    }

    #[test]
    fn error_empty_grid() {
        let e = IndexError::EmptyGrid;
        assert_eq!(e.to_string(), "coordinate grids contain no cells");
    }

    #[test]
    fn error_point_width_mismatch() {
        let e = IndexError::PointWidthMismatch { got: 3, expected: 2 };
        assert_eq!(e.to_string(), "query points have width 3, expected 2");
    }

    #[test]
    fn error_unknown_fields() {
        let e = IndexError::UnknownFields {
            names: vec!["lat".to_string(), "lon".to_string()],
        };
        assert_eq!(e.to_string(), "unknown coordinate fields: [\"lat\", \"lon\"]");
    }

    #[test]
    fn error_missing_fields() {
        let e = IndexError::MissingFields {
            names: vec!["y".to_string()],
        };
        assert_eq!(e.to_string(), "missing coordinate fields: [\"y\"]");
    }

    #[test]
    fn error_query_length_mismatch() {
        let e = IndexError::QueryLengthMismatch {
            field: "y".to_string(),
            expected: 4,
            got: 2,
        };
        assert_eq!(
            e.to_string(),
            "query values for 'y' have length 2, expected 4"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<IndexError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<IndexError>();
    }
}
