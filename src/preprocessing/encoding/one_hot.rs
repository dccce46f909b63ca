//! One-hot encoding for categorical columns.
//!
//! Expands each categorical column into 0/1 indicator columns and collapses
//! them back by arg-max.

use super::{dedup_columns, resolve_columns};
use crate::dataset::{Column, ColumnData, ColumnKind, DataFrame};
use crate::preprocessing::error::{PreprocessingError, Result};
use crate::preprocessing::traits::FittedTransformer;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// One-hot encoder for categorical columns.
///
/// There is no fit step: [`FittedTransformer::transform`] derives the
/// indicator columns from the data it is given. Values are used as they
/// are (no lowercasing), so the inverse restores the original text.
///
/// # Column resolution
///
/// The column list is resolved exactly once. With [`OneHotEncoder::with_columns`]
/// it is fixed at construction; otherwise the first `transform` stores the
/// text columns of its input and every later call reuses that list, even if
/// a later input has different text columns.
///
/// # Name collisions
///
/// Indicator names are `{column}_{value}` and blocks are found by the
/// `{column}_` prefix, so column names where one extends another (`a` and
/// `a_b`) interfere:
///
/// - If two columns produce the same indicator name (`a` holding `"b_c"`
///   and `a_b` holding `"c"` both give `a_b_c`), `transform` fails with
///   [`PreprocessingError::DuplicateColumn`].
/// - Otherwise the inverse of `a` also claims the `a_b_*` indicators, so
///   `a_b` is not reconstructed. Only a `warn` event reports it.
///
/// # Example
/// ```rust
/// use tabular_encoders::dataset::{Column, DataFrame};
/// use tabular_encoders::preprocessing::{FittedTransformer, OneHotEncoder};
///
/// let df = DataFrame::new(vec![Column::text("size", [Some("S"), Some("M"), Some("L")])]).unwrap();
///
/// let encoder = OneHotEncoder::new();
/// let encoded = encoder.transform(&df).unwrap();
/// assert_eq!(encoded.column_names(), vec!["size_S", "size_M", "size_L"]);
///
/// let restored = encoder.inverse_transform(&encoded).unwrap();
/// assert_eq!(restored, df);
/// ```
#[derive(Clone, Debug, Default)]
pub struct OneHotEncoder {
    /// Categorical columns, written once.
    cat_cols: OnceCell<Vec<String>>,
}

impl OneHotEncoder {
    /// Create an encoder that resolves its columns on the first transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder for exactly these columns.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cat_cols: OnceCell::from(dedup_columns(columns.into_iter().map(Into::into))),
        }
    }

    /// The resolved column list, or `None` before the first transform.
    pub fn resolved_columns(&self) -> Option<&[String]> {
        self.cat_cols.get().map(Vec::as_slice)
    }

    /// Names of the indicator columns of `column` present in `data`.
    ///
    /// Any column whose name starts with `{column}_` counts, including
    /// unrelated columns that happen to share the prefix.
    pub fn indicator_columns<'a>(&self, data: &'a DataFrame, column: &str) -> Vec<&'a str> {
        let prefix = indicator_prefix(column);
        data.columns()
            .iter()
            .map(Column::name)
            .filter(|name| name.starts_with(&prefix))
            .collect()
    }

    fn resolve(&self, data: &DataFrame) -> &[String] {
        self.cat_cols.get_or_init(|| {
            let columns = resolve_columns(None, data);
            info!(n_columns = columns.len(), "categorical features detected");
            columns
        })
    }
}

fn indicator_prefix(column: &str) -> String {
    format!("{}_", column)
}

/// Distinct non-null values in order of first occurrence.
fn distinct_values(values: &[Option<String>]) -> Vec<&str> {
    let mut seen = HashSet::new();
    values
        .iter()
        .flatten()
        .map(String::as_str)
        .filter(|v| seen.insert(*v))
        .collect()
}

/// Position of the largest non-null value in `block` at `row`; the first wins ties.
fn arg_max(block: &[&ColumnData], row: usize) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, data) in block.iter().enumerate() {
        if let Some(value) = data.f64_at(row) {
            if best.map_or(true, |(_, top)| value > top) {
                best = Some((i, value));
            }
        }
    }
    best.map(|(i, _)| i)
}

/// Serializable parameters of a OneHotEncoder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OneHotEncoderParams {
    /// Resolved columns, or `None` if not resolved yet.
    pub columns: Option<Vec<String>>,
}

impl FittedTransformer for OneHotEncoder {
    type Input = DataFrame;
    type Output = DataFrame;
    type Params = OneHotEncoderParams;

    fn transform(&self, data: &DataFrame) -> Result<DataFrame> {
        let columns = self.resolve(data);
        let total = columns.len();
        let n_rows = data.n_rows();

        let mut sources = Vec::with_capacity(total);
        for name in columns {
            sources.push(data.require_column(name)?);
        }

        let mut out = data.clone();
        out.drop_columns(columns);

        for (i, column) in sources.into_iter().enumerate() {
            let values: Vec<Option<String>> =
                (0..n_rows).map(|row| column.data().string_at(row)).collect();
            let categories = distinct_values(&values);

            for category in &categories {
                let indicator = values
                    .iter()
                    .map(|v| Some(i64::from(v.as_deref() == Some(*category))))
                    .collect();
                out.push_column(Column::new(
                    format!("{}{}", indicator_prefix(column.name()), category),
                    ColumnData::Int(indicator),
                ))?;
            }

            debug!(
                column = %column.name(),
                position = i + 1,
                total,
                n_indicators = categories.len(),
                "expanded"
            );
        }

        Ok(out)
    }

    /// Collapse each indicator block back into one text column.
    ///
    /// Columns are processed in resolved order and each takes every column
    /// starting with `{column}_`. A column whose name extends an earlier one
    /// (`a_b` after `a`) finds its block already consumed and is silently
    /// left out of the result, apart from a `warn` event.
    fn inverse_transform(&self, data: &DataFrame) -> Result<DataFrame> {
        let columns = self.cat_cols.get().ok_or(PreprocessingError::NotResolved)?;
        let mut out = data.clone();

        for name in columns {
            let prefix = indicator_prefix(name);
            let block: Vec<&Column> = out
                .columns()
                .iter()
                .filter(|c| c.name().starts_with(&prefix))
                .collect();

            if block.is_empty() {
                warn!(column = %name, "no indicator columns found, column not reconstructed");
                continue;
            }

            if let Some(text) = block.iter().find(|c| c.kind() == ColumnKind::Text) {
                return Err(PreprocessingError::TypeMismatch {
                    column: text.name().to_string(),
                    expected: "numeric indicator".to_string(),
                    got: text.kind().to_string(),
                });
            }

            let categories: Vec<&str> = block
                .iter()
                .map(|c| c.name().strip_prefix(prefix.as_str()).unwrap_or_default())
                .collect();
            let cells: Vec<&ColumnData> = block.iter().map(|c| c.data()).collect();
            let labels: Vec<Option<String>> = (0..out.n_rows())
                .map(|row| arg_max(&cells, row).map(|i| categories[i].to_string()))
                .collect();
            let indicators: Vec<String> = block.iter().map(|c| c.name().to_string()).collect();

            out.drop_columns(&indicators);
            let restored = ColumnData::Text(labels);
            if out.contains_column(name) {
                out.replace_column(name, restored)?;
            } else {
                out.push_column(Column::new(name.clone(), restored))?;
            }
            debug!(column = %name, n_indicators = indicators.len(), "collapsed");
        }

        Ok(out)
    }

    fn extract_params(&self) -> OneHotEncoderParams {
        OneHotEncoderParams {
            columns: self.cat_cols.get().cloned(),
        }
    }

    fn from_params(params: OneHotEncoderParams) -> Result<Self> {
        Ok(match params.columns {
            Some(columns) => Self::with_columns(columns),
            None => Self::new(),
        })
    }

    fn n_columns(&self) -> usize {
        self.cat_cols.get().map_or(0, Vec::len)
    }
}
