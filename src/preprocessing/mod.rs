//! Reversible preprocessing transformers for categorical data.
//!
//! Transformers follow a fit/transform split:
//!
//! - [`Transformer`]: Unfitted transformer holding configuration
//! - [`FittedTransformer`]: Ready for `transform` / `inverse_transform` and serialization
//!
//! Every operation takes a [`DataFrame`](crate::dataset::DataFrame) by
//! reference and returns a new one.
//!
//! # Available Transformers
//!
//! - [`IntegerEncoder`]: Normalized labels to dense integer codes, nulls to `-999`
//! - [`OneHotEncoder`]: Labels to 0/1 indicator columns (no fit step)
//!
//! # Example
//!
//! ```rust
//! use tabular_encoders::dataset::{Column, DataFrame};
//! use tabular_encoders::preprocessing::{FittedTransformer, IntegerEncoder, Transformer};
//!
//! let train = DataFrame::new(vec![Column::text("color", [Some("Red"), Some("blue")])]).unwrap();
//! let fitted = IntegerEncoder::new().fit(&train).unwrap();
//!
//! let encoded = fitted.transform(&train).unwrap();
//! let restored = fitted.inverse_transform(&encoded).unwrap();
//! assert_eq!(
//!     restored.column("color").unwrap().data(),
//!     &tabular_encoders::dataset::ColumnData::Text(vec![
//!         Some("red".to_string()),
//!         Some("blue".to_string()),
//!     ])
//! );
//! ```

pub mod encoding;
pub mod error;
pub mod traits;

// Re-export main types
pub use encoding::{
    normalize, FittedIntegerEncoder, IntegerEncoder, IntegerEncoderParams, NullEncoding,
    OneHotEncoder, OneHotEncoderParams, Vocabulary, NULL_SENTINEL,
};
pub use error::{PreprocessingError, Result};
pub use traits::{FittedTransformer, Transformer};
