//! Fit/transform traits shared by the encoders.
//!
//! [`IntegerEncoder`](super::IntegerEncoder) learns sorted vocabularies, so it
//! implements [`Transformer`] and fits into a
//! [`FittedIntegerEncoder`](super::FittedIntegerEncoder).
//! [`OneHotEncoder`](super::OneHotEncoder) has nothing to learn ahead of time
//! and implements [`FittedTransformer`] directly.

use crate::preprocessing::error::Result;
use crate::serialization::SerializableParams;
use std::path::Path;

/// An encoder configuration that must see data before it can encode.
///
/// # Example
/// ```rust
/// use tabular_encoders::dataset::{Column, DataFrame};
/// use tabular_encoders::preprocessing::{FittedTransformer, IntegerEncoder, Transformer};
///
/// let train = DataFrame::new(vec![Column::text("color", [Some("Red"), Some("blue")])]).unwrap();
/// let fitted = IntegerEncoder::new().fit(&train).unwrap();
/// assert_eq!(fitted.n_columns(), 1);
/// ```
pub trait Transformer: Clone {
    type Input;
    type Output;
    type Params: SerializableParams;
    type Fitted: FittedTransformer<Params = Self::Params, Input = Self::Input, Output = Self::Output>;

    /// Learn the categories of each configured column.
    ///
    /// # Errors
    /// Fails if a configured column is missing from `data`.
    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted>;

    fn fit_transform(&self, data: &Self::Input) -> Result<Self::Output> {
        self.fit(data)?.transform(data)
    }
}

/// An encoder that can encode, decode and be persisted.
///
/// `extract_params` followed by `from_params` yields an encoder with the same
/// behavior, and the file helpers store exactly those params.
pub trait FittedTransformer: Clone {
    type Input;
    type Output;
    type Params: SerializableParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output>;

    /// Map encoded columns back to text.
    ///
    /// The integer encoder returns normalized (lowercased) labels; the
    /// one-hot encoder returns the values as they were before encoding.
    fn inverse_transform(&self, data: &Self::Output) -> Result<Self::Input>;

    fn extract_params(&self) -> Self::Params;

    fn from_params(params: Self::Params) -> Result<Self>
    where
        Self: Sized;

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.extract_params().to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(path)?;
        Self::from_params(Self::Params::from_bytes(&bytes)?)
    }

    /// Number of categorical columns handled.
    fn n_columns(&self) -> usize;
}
