//! Integer encoding for categorical columns.
//!
//! Maps each normalized label of a column to a dense integer code
//! (0, 1, 2, ...) and writes the null sentinel for missing labels.

use super::{normalized_cell, resolve_columns, NullEncoding, Vocabulary};
use crate::dataset::{ColumnData, DataFrame};
use crate::preprocessing::error::{PreprocessingError, Result};
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Integer encoder for categorical columns.
///
/// Labels are normalized (coerced to text and lowercased) before they are
/// looked up, so `"Red"` and `"RED"` share one code and decode to `"red"`.
/// Codes follow ascending lexical order of the normalized labels.
///
/// # Example
/// ```rust
/// use tabular_encoders::dataset::{Column, ColumnData, DataFrame};
/// use tabular_encoders::preprocessing::{FittedTransformer, IntegerEncoder, Transformer};
///
/// let df = DataFrame::new(vec![Column::text(
///     "color",
///     [Some("Red"), Some("blue"), None, Some("RED")],
/// )])
/// .unwrap();
///
/// let fitted = IntegerEncoder::new().fit(&df).unwrap();
/// let encoded = fitted.transform(&df).unwrap();
/// assert_eq!(
///     encoded.column("color").unwrap().data(),
///     &ColumnData::Int(vec![Some(1), Some(0), Some(-999), Some(1)])
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct IntegerEncoder {
    /// Columns to encode; `None` selects every text column at fit time.
    cat_cols: Option<Vec<String>>,
    /// Representation of missing labels in the output.
    null_encoding: NullEncoding,
}

impl IntegerEncoder {
    /// Create a new IntegerEncoder that encodes all text columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode exactly these columns instead of auto-detecting text columns.
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cat_cols = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Set how missing labels are written.
    pub fn with_null_encoding(mut self, null_encoding: NullEncoding) -> Self {
        self.null_encoding = null_encoding;
        self
    }
}

/// Serializable parameters for a fitted IntegerEncoder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntegerEncoderParams {
    /// Encoded columns, in encoding order.
    pub columns: Vec<String>,
    /// Sorted labels of each column; a label's position is its code.
    pub categories: Vec<Vec<String>>,
    /// Representation of missing labels.
    pub null_encoding: NullEncoding,
}

/// Fitted IntegerEncoder ready for inference.
#[derive(Clone, Debug)]
pub struct FittedIntegerEncoder {
    /// Vocabulary of each encoded column, in encoding order.
    vocabularies: Vec<(String, Vocabulary)>,
    null_encoding: NullEncoding,
}

impl FittedIntegerEncoder {
    fn new(vocabularies: Vec<(String, Vocabulary)>, null_encoding: NullEncoding) -> Result<Self> {
        if let Some(sentinel) = null_encoding.sentinel() {
            for (column, vocabulary) in &vocabularies {
                let collides =
                    usize::try_from(sentinel).is_ok_and(|code| code < vocabulary.len());
                if collides {
                    return Err(PreprocessingError::InvalidParameter(format!(
                        "null sentinel {} collides with a code of column '{}'",
                        sentinel, column
                    )));
                }
            }
        }
        Ok(Self {
            vocabularies,
            null_encoding,
        })
    }

    /// Names of the encoded columns, in encoding order.
    pub fn columns(&self) -> Vec<&str> {
        self.vocabularies.iter().map(|(c, _)| c.as_str()).collect()
    }

    /// Vocabulary learned for `column`.
    pub fn vocabulary(&self, column: &str) -> Option<&Vocabulary> {
        self.vocabularies
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    pub fn null_encoding(&self) -> NullEncoding {
        self.null_encoding
    }

    fn decode(
        &self,
        column: &str,
        vocabulary: &Vocabulary,
        code: Option<i64>,
    ) -> Result<Option<String>> {
        let code = match code {
            None => return Ok(None),
            Some(code) if Some(code) == self.null_encoding.sentinel() => return Ok(None),
            Some(code) => code,
        };
        usize::try_from(code)
            .ok()
            .and_then(|c| vocabulary.label(c))
            .map(|label| Some(label.to_string()))
            .ok_or_else(|| PreprocessingError::UnknownCode {
                column: column.to_string(),
                code,
            })
    }

    fn decode_column(
        &self,
        column: &str,
        vocabulary: &Vocabulary,
        data: &ColumnData,
    ) -> Result<Vec<Option<String>>> {
        match data {
            ColumnData::Int(codes) => codes
                .iter()
                .map(|&code| self.decode(column, vocabulary, code))
                .collect(),
            ColumnData::Float(codes) => codes
                .iter()
                .map(|&value| match value {
                    None => Ok(None),
                    Some(v) if v.is_nan() => Ok(None),
                    Some(v) if v.fract() == 0.0 => self.decode(column, vocabulary, Some(v as i64)),
                    Some(v) => Err(PreprocessingError::TypeMismatch {
                        column: column.to_string(),
                        expected: "integer codes".to_string(),
                        got: format!("non-integral value {}", v),
                    }),
                })
                .collect(),
            ColumnData::Text(_) => Err(PreprocessingError::TypeMismatch {
                column: column.to_string(),
                expected: "integer codes".to_string(),
                got: data.kind().to_string(),
            }),
        }
    }
}

impl Transformer for IntegerEncoder {
    type Input = DataFrame;
    type Output = DataFrame;
    type Params = IntegerEncoderParams;
    type Fitted = FittedIntegerEncoder;

    fn fit(&self, data: &DataFrame) -> Result<FittedIntegerEncoder> {
        let columns = resolve_columns(self.cat_cols.as_deref(), data);
        let total = columns.len();
        info!(n_columns = total, "categorical features detected");

        let mut vocabularies = Vec::with_capacity(total);
        for (i, name) in columns.into_iter().enumerate() {
            let column = data.require_column(&name)?;
            let vocabulary = Vocabulary::from_labels(
                (0..column.len()).filter_map(|row| normalized_cell(column.data(), row)),
            );
            debug!(
                column = %name,
                position = i + 1,
                total,
                n_categories = vocabulary.len(),
                "scanned"
            );
            vocabularies.push((name, vocabulary));
        }

        FittedIntegerEncoder::new(vocabularies, self.null_encoding)
    }
}

impl FittedTransformer for FittedIntegerEncoder {
    type Input = DataFrame;
    type Output = DataFrame;
    type Params = IntegerEncoderParams;

    fn transform(&self, data: &DataFrame) -> Result<DataFrame> {
        let total = self.vocabularies.len();
        let sentinel = self.null_encoding.sentinel();
        let mut out = data.clone();
        info!(sentinel = ?sentinel, "encoding null values");

        for (i, (name, vocabulary)) in self.vocabularies.iter().enumerate() {
            let column = data.require_column(name)?;
            let codes = (0..column.len())
                .map(|row| match normalized_cell(column.data(), row) {
                    Some(label) => vocabulary
                        .code(&label)
                        .map(|code| Some(code as i64))
                        .ok_or_else(|| PreprocessingError::UnknownCategory {
                            column: name.clone(),
                            label,
                        }),
                    None => Ok(sentinel),
                })
                .collect::<Result<Vec<_>>>()?;

            out.replace_column(name, ColumnData::Int(codes))?;
            debug!(column = %name, position = i + 1, total, "transformed");
        }

        Ok(out)
    }

    fn inverse_transform(&self, data: &DataFrame) -> Result<DataFrame> {
        let total = self.vocabularies.len();
        let mut out = data.clone();
        info!(null_encoding = ?self.null_encoding, "recoding null values");

        for (i, (name, vocabulary)) in self.vocabularies.iter().enumerate() {
            let column = data.require_column(name)?;
            let labels = self.decode_column(name, vocabulary, column.data())?;
            out.replace_column(name, ColumnData::Text(labels))?;
            debug!(column = %name, position = i + 1, total, "restored");
        }

        Ok(out)
    }

    fn extract_params(&self) -> IntegerEncoderParams {
        let (columns, categories) = self
            .vocabularies
            .iter()
            .map(|(c, v)| (c.clone(), v.labels().to_vec()))
            .unzip();

        IntegerEncoderParams {
            columns,
            categories,
            null_encoding: self.null_encoding,
        }
    }

    fn from_params(params: IntegerEncoderParams) -> Result<Self> {
        if params.columns.len() != params.categories.len() {
            return Err(PreprocessingError::InvalidParameter(format!(
                "{} columns but {} category lists",
                params.columns.len(),
                params.categories.len()
            )));
        }

        let mut vocabularies: Vec<(String, Vocabulary)> = Vec::with_capacity(params.columns.len());
        for (column, labels) in params.columns.into_iter().zip(params.categories) {
            if vocabularies.iter().any(|(c, _)| *c == column) {
                return Err(PreprocessingError::DuplicateColumn(column));
            }
            let vocabulary = Vocabulary::from_sorted(labels)?;
            vocabularies.push((column, vocabulary));
        }

        FittedIntegerEncoder::new(vocabularies, params.null_encoding)
    }

    fn n_columns(&self) -> usize {
        self.vocabularies.len()
    }
}
