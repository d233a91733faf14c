//! Nearest-neighbor coordinate selection for labeled multidimensional grids.
//!
//! This crate builds a k-d tree over named coordinate arrays and translates
//! "nearest point to these query coordinates" into integer grid positions.
//! Tree construction and search are delegated to [`kiddo`]; the crate's own
//! work is data reshaping, validation, and index-format translation.
//!
//! | Metric | Formula | Backend |
//! |--------|---------|---------|
//! | Euclidean | `sqrt(Σ (aᵢ−bᵢ)²)` | `kiddo::SquaredEuclidean` |
//! | Manhattan | `Σ \|aᵢ−bᵢ\|` | `kiddo::Manhattan` |
//! | Chebyshev | `max \|aᵢ−bᵢ\|` | local `DistanceMetric` impl |
//!
//! # Quick start
//!
//! ```
//! use coordsel::{CoordinateIndex, IndexConfig, Variable};
//! use indexmap::IndexMap;
//! use ndarray::array;
//!
//! // A 3×3 grid: x varies along "col", y along "row".
//! let x = Variable::new(
//!     vec!["row", "col"],
//!     array![[0.0, 1.0, 2.0], [0.0, 1.0, 2.0], [0.0, 1.0, 2.0]].into_dyn(),
//! )
//! .unwrap();
//! let y = Variable::new(
//!     vec!["row", "col"],
//!     array![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]].into_dyn(),
//! )
//! .unwrap();
//!
//! let mut variables = IndexMap::new();
//! variables.insert("x".to_string(), x);
//! variables.insert("y".to_string(), y);
//! let index = CoordinateIndex::from_variables(&variables, &IndexConfig::default()).unwrap();
//!
//! let mut query = IndexMap::new();
//! query.insert("x".to_string(), array![0.9]);
//! query.insert("y".to_string(), array![1.1]);
//! let positions = index.select(&query).unwrap();
//!
//! // (0.9, 1.1) is closest to the grid point (x=1, y=1).
//! assert_eq!(positions["row"].values()[0], 1);
//! assert_eq!(positions["col"].values()[0], 1);
//! ```
//!
//! # Architecture
//!
//! ```text
//! CoordinateIndex::from_variables()
//!   ├─ validate dims/shape      (index.rs)
//!   ├─ stack_grids()            (points.rs)
//!   └─ PointTree::build()       (tree.rs)
//!
//! CoordinateIndex::select()
//!   ├─ validate field names     (select.rs)
//!   ├─ stack_columns()          (points.rs)
//!   ├─ query()
//!   │    ├─ PointTree::nearest()  (tree.rs)
//!   │    └─ unravel_index()       (points.rs)
//!   └─ package PositionIndexers (select.rs)
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod select;
pub mod variable;

pub(crate) mod points;
pub(crate) mod tree;

pub use config::{IndexConfig, Metric};
pub use error::IndexError;
pub use index::{CoordinateIndex, GridIndex};
pub use select::PositionIndexer;
pub use tree::MAX_FIELDS;
pub use variable::Variable;
