//! In-memory table loaded from a delimited file.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A single cell value as it appears in a report or a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    #[default]
    Blank,
    /// May carry `NaN` or an infinity; writers render those as error markers.
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Blank, Self::Number)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => Ok(()),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Element kind of a column, decided once when the table is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    Numeric,
    Text,
}

impl ColumnKind {
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Numeric)
    }
}

/// Column values, tagged by kind. `None` is a null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slice(&self, start: usize, end: usize) -> Self {
        match self {
            Self::Numeric(values) => Self::Numeric(values[start..end].to_vec()),
            Self::Text(values) => Self::Text(values[start..end].to_vec()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    /// Source dtype label reported by the loader (e.g. `i64`, `f64`, `str`).
    pub dtype: String,
    pub data: ColumnData,
}

impl Column {
    /// Builds a numeric column. `NaN` values are stored as nulls.
    pub fn numeric(
        name: impl Into<String>,
        dtype: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> Self {
        let values = values
            .into_iter()
            .map(|value| value.filter(|v| !v.is_nan()))
            .collect();
        Self {
            name: name.into(),
            dtype: dtype.into(),
            data: ColumnData::Numeric(values),
        }
    }

    pub fn text(
        name: impl Into<String>,
        dtype: impl Into<String>,
        values: Vec<Option<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            dtype: dtype.into(),
            data: ColumnData::Text(values),
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self.data {
            ColumnData::Numeric(_) => ColumnKind::Numeric,
            ColumnData::Text(_) => ColumnKind::Text,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn null_count(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(values) => values.iter().filter(|v| v.is_none()).count(),
            ColumnData::Text(values) => values.iter().filter(|v| v.is_none()).count(),
        }
    }

    /// Numeric values with nulls removed; empty for text columns.
    pub fn non_null_numbers(&self) -> Vec<f64> {
        match &self.data {
            ColumnData::Numeric(values) => values.iter().flatten().copied().collect(),
            ColumnData::Text(_) => Vec::new(),
        }
    }

    pub fn as_numeric(&self) -> Option<&[Option<f64>]> {
        match &self.data {
            ColumnData::Numeric(values) => Some(values),
            ColumnData::Text(_) => None,
        }
    }

    pub fn cell(&self, row: usize) -> CellValue {
        match &self.data {
            ColumnData::Numeric(values) => values.get(row).copied().flatten().into(),
            ColumnData::Text(values) => values
                .get(row)
                .and_then(Option::as_ref)
                .map_or(CellValue::Blank, |v| CellValue::Text(v.clone())),
        }
    }

    pub fn cells(&self) -> Vec<CellValue> {
        (0..self.len()).map(|row| self.cell(row)).collect()
    }
}

/// Ordered named columns sharing one row count, plus row labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
    index: Vec<usize>,
    row_count: usize,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map_or(0, Column::len);
        let index = (0..row_count).collect();
        Self::with_index(columns, index)
    }

    pub fn with_index(columns: Vec<Column>, index: Vec<usize>) -> Result<Self> {
        let row_count = index.len();
        for column in &columns {
            if column.len() != row_count {
                return Err(ModelError::RaggedColumns {
                    column: column.name.clone(),
                    expected: row_count,
                    actual: column.len(),
                });
            }
        }
        Ok(Self {
            columns,
            index,
            row_count,
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns
            .iter()
            .filter(|column| column.kind().is_numeric())
    }

    /// Row labels: the row's position in the source file.
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn head(&self, n: usize) -> Self {
        self.slice(0, n.min(self.row_count))
    }

    pub fn tail(&self, n: usize) -> Self {
        self.slice(self.row_count.saturating_sub(n), self.row_count)
    }

    fn slice(&self, start: usize, end: usize) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|column| Column {
                    name: column.name.clone(),
                    dtype: column.dtype.clone(),
                    data: column.data.slice(start, end),
                })
                .collect(),
            index: self.index[start..end].to_vec(),
            row_count: end - start,
        }
    }
}
