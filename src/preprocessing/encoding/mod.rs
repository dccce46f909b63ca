//! Categorical feature encoding transformers.
//!
//! This module provides reversible encoders that turn categorical columns of a
//! [`DataFrame`] into numbers and back.
//!
//! # Available Encoders
//!
//! ## IntegerEncoder
//! Maps each normalized label to a dense integer code; missing values become
//! the null sentinel (`-999` by default).
//!
//! ```ignore
//! // color: ["Red", "blue", None, "RED"]
//! // codes: [1, 0, -999, 1]            vocabulary {blue: 0, red: 1}
//! ```
//!
//! ## OneHotEncoder
//! Expands each categorical column into one 0/1 indicator column per observed
//! value, named `{column}_{value}`.
//!
//! ```ignore
//! // size: ["S", "M", "L"]
//! // size_S, size_M, size_L: [1,0,0], [0,1,0], [0,0,1]
//! ```
//!
//! # Column Resolution
//!
//! Both encoders take an optional list of categorical columns. When it is not
//! given, every text column of the data is used, in column order.

mod integer;
mod one_hot;
mod vocabulary;

pub use integer::{FittedIntegerEncoder, IntegerEncoder, IntegerEncoderParams};
pub use one_hot::{OneHotEncoder, OneHotEncoderParams};
pub use vocabulary::Vocabulary;

use crate::dataset::{ColumnData, ColumnKind, DataFrame};
use serde::{Deserialize, Serialize};

/// Integer written for missing labels by default.
pub const NULL_SENTINEL: i64 = -999;

/// Lowercased text that stands for a missing value after string coercion.
const NULL_TOKEN: &str = "nan";

/// How missing labels are represented in integer-encoded output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullEncoding {
    /// Write this value for missing labels and read it back as missing.
    Sentinel(i64),
    /// Keep missing labels as missing integers.
    Native,
}

impl NullEncoding {
    /// The sentinel value, if any.
    pub fn sentinel(&self) -> Option<i64> {
        match self {
            NullEncoding::Sentinel(value) => Some(*value),
            NullEncoding::Native => None,
        }
    }
}

impl Default for NullEncoding {
    fn default() -> Self {
        NullEncoding::Sentinel(NULL_SENTINEL)
    }
}

/// Normalize a raw label: lowercase it and treat the `nan` token as missing.
///
/// This is the form in which [`IntegerEncoder`] stores and restores labels.
///
/// ```rust
/// use tabular_encoders::preprocessing::normalize;
///
/// assert_eq!(normalize(Some("RED")), Some("red".to_string()));
/// assert_eq!(normalize(Some("NaN")), None);
/// assert_eq!(normalize(None), None);
/// ```
pub fn normalize(raw: Option<&str>) -> Option<String> {
    raw.map(str::to_lowercase).filter(|label| label != NULL_TOKEN)
}

/// Normalized label of one cell.
fn normalized_cell(data: &ColumnData, row: usize) -> Option<String> {
    normalize(data.string_at(row).as_deref())
}

/// Configured columns with duplicates removed, or all text columns of `data`.
fn resolve_columns(configured: Option<&[String]>, data: &DataFrame) -> Vec<String> {
    match configured {
        Some(columns) => dedup_columns(columns.iter().cloned()),
        None => data.columns_of_kind(ColumnKind::Text),
    }
}

fn dedup_columns<I>(columns: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut unique: Vec<String> = Vec::new();
    for column in columns {
        if !unique.contains(&column) {
            unique.push(column);
        }
    }
    unique
}
