//! # tabular-encoders
//!
//! Reversible encoders for the categorical columns of in-memory tables.
//!
//! ## Core Design Principles
//!
//! - **Fit/Inference Separation**: Unfitted encoders hold configuration only;
//!   fitting produces an immutable fitted encoder with the learned vocabularies.
//! - **Round-trips**: every transform has an inverse. Integer encoding restores
//!   normalized (lowercased) labels, one-hot encoding restores the original text.
//! - **Explicit Missing Values**: missing labels are written as a sentinel
//!   (`-999`) or kept as native nulls, never silently imputed.
//! - **Copy-on-write**: inputs are never mutated; every operation returns a new table.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabular_encoders::dataset::{Column, ColumnData, DataFrame};
//! use tabular_encoders::preprocessing::{
//!     FittedTransformer, IntegerEncoder, OneHotEncoder, Transformer,
//! };
//!
//! let df = DataFrame::new(vec![
//!     Column::text("color", [Some("Red"), Some("blue"), None, Some("RED")]),
//!     Column::float("price", [Some(1.0), Some(2.0), Some(3.0), Some(4.0)]),
//! ])
//! .unwrap();
//!
//! // Integer codes; missing labels become -999
//! let fitted = IntegerEncoder::new().fit(&df).unwrap();
//! let encoded = fitted.transform(&df).unwrap();
//! assert_eq!(
//!     encoded.column("color").unwrap().data(),
//!     &ColumnData::Int(vec![Some(1), Some(0), Some(-999), Some(1)])
//! );
//!
//! // Indicator columns; null rows are all zero
//! let one_hot = OneHotEncoder::new();
//! let expanded = one_hot.transform(&df).unwrap();
//! assert_eq!(
//!     expanded.column_names(),
//!     vec!["price", "color_Red", "color_blue", "color_RED"]
//! );
//! ```
//!
//! ## Module Structure
//!
//! - `dataset` — Named, typed columns (`DataFrame`, `Column`, `ColumnData`)
//! - `preprocessing` — Encoders, transformer traits and errors
//! - `serialization` — Byte encoding of fitted parameters
//!
//! ## Features
//!
//! - `ndarray` — `DataFrame::to_array2` for handing encoded tables to models

/// Named, typed columns sharing one row index.
pub mod dataset;

/// Categorical encoders and the transformer traits.
pub mod preprocessing;

/// Parameter persistence for fitted encoders.
pub mod serialization;

pub use dataset::{Column, ColumnData, ColumnKind, DataFrame};
pub use preprocessing::{
    FittedIntegerEncoder, FittedTransformer, IntegerEncoder, NullEncoding, OneHotEncoder,
    PreprocessingError, Transformer,
};
