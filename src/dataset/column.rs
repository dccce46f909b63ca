use std::fmt;

/// Declared kind of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Free text or categorical labels.
    Text,
    /// 64-bit signed integers.
    Int,
    /// 64-bit floats. NaN counts as missing.
    Float,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Text => write!(f, "text"),
            ColumnKind::Int => write!(f, "integer"),
            ColumnKind::Float => write!(f, "float"),
        }
    }
}

/// Cell storage for one column. `None` is a missing value.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
    Text(Vec<Option<String>>),
    Int(Vec<Option<i64>>),
    Float(Vec<Option<f64>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Text(v) => v.len(),
            ColumnData::Int(v) => v.len(),
            ColumnData::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnData::Text(_) => ColumnKind::Text,
            ColumnData::Int(_) => ColumnKind::Int,
            ColumnData::Float(_) => ColumnKind::Float,
        }
    }

    /// Returns true if the cell at `row` is missing. Float NaN is missing.
    pub fn is_null(&self, row: usize) -> bool {
        match self {
            ColumnData::Text(v) => v[row].is_none(),
            ColumnData::Int(v) => v[row].is_none(),
            ColumnData::Float(v) => v[row].map_or(true, f64::is_nan),
        }
    }

    /// String form of the cell at `row`, or `None` when it is missing.
    ///
    /// Integers use decimal notation and floats Rust's shortest round-trip
    /// form with a trailing `.0` for whole numbers (`2.0`, `0.5`).
    pub fn string_at(&self, row: usize) -> Option<String> {
        match self {
            ColumnData::Text(v) => v[row].clone(),
            ColumnData::Int(v) => v[row].map(|x| x.to_string()),
            ColumnData::Float(v) => v[row]
                .filter(|x| !x.is_nan())
                .map(|x| format!("{:?}", x)),
        }
    }

    /// Numeric value of the cell at `row`. Text cells yield `None`.
    pub fn f64_at(&self, row: usize) -> Option<f64> {
        match self {
            ColumnData::Text(_) => None,
            ColumnData::Int(v) => v[row].map(|x| x as f64),
            ColumnData::Float(v) => v[row].filter(|x| !x.is_nan()),
        }
    }
}

/// A named column.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Build a text column from optional string-like values.
    ///
    /// ```ignore
    /// let color = Column::text("color", [Some("Red"), None, Some("blue")]);
    /// ```
    pub fn text<S, I>(name: impl Into<String>, values: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Option<S>>,
    {
        let values = values.into_iter().map(|v| v.map(Into::into)).collect();
        Self::new(name, ColumnData::Text(values))
    }

    pub fn int<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = Option<i64>>,
    {
        Self::new(name, ColumnData::Int(values.into_iter().collect()))
    }

    pub fn float<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        Self::new(name, ColumnData::Float(values.into_iter().collect()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn kind(&self) -> ColumnKind {
        self.data.kind()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_data(self) -> ColumnData {
        self.data
    }
}
