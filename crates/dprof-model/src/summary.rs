//! Per-column statistics produced by the stats engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::table::{CellValue, ColumnKind};

/// Share of null rows in a column.
///
/// A column without nulls reports the literal text `0`; otherwise the rounded
/// percentage is reported as a number. Both render through [`NullPercent::cell`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NullPercent {
    Zero,
    Rounded(f64),
}

impl NullPercent {
    /// `round(null_count / row_count * 100)` with ties to even, or `Zero` when
    /// nothing is null.
    pub fn from_counts(null_count: usize, row_count: usize) -> Self {
        if null_count == 0 || row_count == 0 {
            return Self::Zero;
        }
        Self::Rounded((null_count as f64 / row_count as f64 * 100.0).round_ties_even())
    }

    pub fn value(self) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::Rounded(value) => value,
        }
    }

    pub fn cell(self) -> CellValue {
        match self {
            Self::Zero => CellValue::text("0"),
            Self::Rounded(value) => CellValue::Number(value),
        }
    }
}

/// Cardinality-based tag for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableClass {
    Continuous,
    Discrete,
    Categorical,
}

impl VariableClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Continuous => "continuous",
            Self::Discrete => "discrete",
            Self::Categorical => "categorical",
        }
    }
}

impl fmt::Display for VariableClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive statistics over the non-null values of a numeric column.
///
/// Undefined values (empty column, variance of a single value) are `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub var: f64,
    pub range: f64,
    pub p0: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p100: f64,
}

impl NumericStats {
    /// Values in report order: mean, median, std, var, range, 0%, 25%, 50%, 75%, 100%.
    pub fn values(&self) -> [f64; 10] {
        [
            self.mean,
            self.median,
            self.std,
            self.var,
            self.range,
            self.p0,
            self.p25,
            self.p50,
            self.p75,
            self.p100,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnKind,
    pub dtype: String,
    pub count: usize,
    pub null_count: usize,
    pub null_percent: NullPercent,
    /// Present only for numeric columns.
    pub numeric: Option<NumericStats>,
    /// Distinct non-null values.
    pub distinct_count: usize,
    pub class: VariableClass,
}

/// Statistic labels in the order used by the transposed summary sheet.
pub const SUMMARY_FIELDS: [&str; 14] = [
    "dtype",
    "count",
    "totalNull",
    "totalNullPerc",
    "mean",
    "median",
    "std",
    "var",
    "range",
    "0%",
    "25%",
    "50%",
    "75%",
    "100%",
];

impl ColumnSummary {
    pub fn is_numeric(&self) -> bool {
        self.kind.is_numeric()
    }

    /// One cell per entry of [`SUMMARY_FIELDS`]; numeric fields are blank for text columns.
    pub fn field_cells(&self) -> Vec<CellValue> {
        let mut cells = vec![
            CellValue::text(self.dtype.clone()),
            CellValue::Number(self.count as f64),
            CellValue::Number(self.null_count as f64),
            self.null_percent.cell(),
        ];
        match &self.numeric {
            Some(stats) => cells.extend(stats.values().into_iter().map(CellValue::Number)),
            None => cells.extend(std::iter::repeat_n(CellValue::Blank, 10)),
        }
        cells
    }
}

/// One distinct observed value and the share of rows holding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    /// `Blank` stands for the null group.
    pub value: CellValue,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub column: String,
    /// Sorted descending by percentage.
    pub entries: Vec<DistributionEntry>,
    pub distinct_count: usize,
    /// Set when only the leading entries were kept.
    pub truncated: bool,
}

impl Distribution {
    pub fn total_percentage(&self) -> f64 {
        self.entries.iter().map(|entry| entry.percentage).sum()
    }
}
