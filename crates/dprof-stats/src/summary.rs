//! Per-column summary statistics.

use dprof_model::{Column, ColumnSummary, NullPercent, ProfileOptions, Table};
use tracing::debug;

use crate::descriptive::numeric_stats;
use crate::distribution::{classify, distinct_count};

/// Column summaries in table order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryTable {
    columns: Vec<ColumnSummary>,
}

impl SummaryTable {
    pub fn get(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|summary| summary.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnSummary> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<'a> IntoIterator for &'a SummaryTable {
    type Item = &'a ColumnSummary;
    type IntoIter = std::slice::Iter<'a, ColumnSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

pub fn summarize_column(
    column: &Column,
    row_count: usize,
    options: &ProfileOptions,
) -> ColumnSummary {
    let null_count = column.null_count();
    let kind = column.kind();
    let distinct = distinct_count(column);
    let numeric = kind
        .is_numeric()
        .then(|| numeric_stats(&column.non_null_numbers()));
    ColumnSummary {
        name: column.name.clone(),
        kind,
        dtype: column.dtype.clone(),
        count: row_count - null_count,
        null_count,
        null_percent: NullPercent::from_counts(null_count, row_count),
        numeric,
        distinct_count: distinct,
        class: classify(kind, distinct, options),
    }
}

/// Summarizes every column of the table.
pub fn compute_summary(table: &Table, options: &ProfileOptions) -> SummaryTable {
    let columns = table
        .columns()
        .iter()
        .map(|column| {
            let summary = summarize_column(column, table.row_count(), options);
            debug!(
                column = %summary.name,
                kind = ?summary.kind,
                null_count = summary.null_count,
                distinct = summary.distinct_count,
                class = %summary.class,
                "column summarized"
            );
            summary
        })
        .collect();
    SummaryTable { columns }
}
