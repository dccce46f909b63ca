//! In-memory tabular data.
//!
//! A [`DataFrame`] is an ordered list of named, typed columns of equal
//! length. Row position is the row index: every encoder keeps rows in the
//! order it received them and returns a new frame instead of mutating its
//! input.
//!
//! # Example
//!
//! ```rust
//! use tabular_encoders::dataset::{Column, ColumnKind, DataFrame};
//!
//! let df = DataFrame::new(vec![
//!     Column::text("color", [Some("Red"), Some("blue"), None]),
//!     Column::float("price", [Some(1.5), Some(2.0), Some(0.25)]),
//! ])
//! .unwrap();
//!
//! assert_eq!(df.n_rows(), 3);
//! assert_eq!(df.columns_of_kind(ColumnKind::Text), vec!["color".to_string()]);
//! ```

mod column;

pub use self::column::{Column, ColumnData, ColumnKind};

use crate::preprocessing::error::{PreprocessingError, Result};

/// A table of named columns sharing one row index.
///
/// The row count is stored on the frame, so dropping every column keeps it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataFrame {
    columns: Vec<Column>,
    n_rows: usize,
}

impl DataFrame {
    /// Build a frame, checking that names are unique and lengths agree.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut df = DataFrame::default();
        for column in columns {
            df.push_column(column)?;
        }
        Ok(df)
    }

    /// Number of rows. Survives [`DataFrame::drop_columns`] removing every column.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Like [`DataFrame::column`], but a missing column is a configuration error.
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| PreprocessingError::MissingColumn(name.to_string()))
    }

    /// Names of all columns of `kind`, in column order.
    pub fn columns_of_kind(&self, kind: ColumnKind) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.kind() == kind)
            .map(|c| c.name().to_string())
            .collect()
    }

    /// Append a column at the end.
    ///
    /// The column must match the frame's row count. Only a frame with
    /// neither columns nor rows takes its row count from the first column.
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if self.contains_column(column.name()) {
            return Err(PreprocessingError::DuplicateColumn(
                column.name().to_string(),
            ));
        }
        if self.columns.is_empty() && self.n_rows == 0 {
            self.n_rows = column.len();
        } else if column.len() != self.n_rows {
            return Err(PreprocessingError::LengthMismatch {
                column: column.name().to_string(),
                expected: self.n_rows,
                got: column.len(),
            });
        }
        self.columns.push(column);
        Ok(())
    }

    /// Replace the data of an existing column in place, keeping its position.
    pub fn replace_column(&mut self, name: &str, data: ColumnData) -> Result<()> {
        let n_rows = self.n_rows();
        let slot = self
            .columns
            .iter_mut()
            .find(|c| c.name() == name)
            .ok_or_else(|| PreprocessingError::MissingColumn(name.to_string()))?;
        if data.len() != n_rows {
            return Err(PreprocessingError::LengthMismatch {
                column: name.to_string(),
                expected: n_rows,
                got: data.len(),
            });
        }
        *slot = Column::new(name, data);
        Ok(())
    }

    /// Remove every column whose name is in `names`. Unknown names are ignored.
    ///
    /// The row count is unchanged, even when no column remains.
    pub fn drop_columns<S: AsRef<str>>(&mut self, names: &[S]) {
        self.columns
            .retain(|c| !names.iter().any(|n| n.as_ref() == c.name()));
    }

    /// Dense row-major matrix of all columns, for handing encoded data to a model.
    ///
    /// Missing values become NaN. Fails with [`PreprocessingError::TypeMismatch`]
    /// if a text column is still present.
    #[cfg(feature = "ndarray")]
    pub fn to_array2(&self) -> Result<ndarray::Array2<f64>> {
        for column in &self.columns {
            if column.kind() == ColumnKind::Text {
                return Err(PreprocessingError::TypeMismatch {
                    column: column.name().to_string(),
                    expected: "numeric".to_string(),
                    got: column.kind().to_string(),
                });
            }
        }

        let (rows, cols) = (self.n_rows(), self.n_columns());
        let mut values = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for column in &self.columns {
                values.push(column.data().f64_at(row).unwrap_or(f64::NAN));
            }
        }

        ndarray::Array2::from_shape_vec((rows, cols), values)
            .map_err(|e| PreprocessingError::InvalidParameter(e.to_string()))
    }
}
