//! Distinct observed values and their share of rows.

use std::collections::BTreeMap;

use dprof_model::{
    CellValue, Column, ColumnData, ColumnKind, Distribution, DistributionEntry, ProfileOptions,
    Table, VariableClass,
};

use crate::error::{Result, StatsError};

/// Value groups in ascending value order, with the null group (if any) last.
struct Groups {
    values: Vec<(CellValue, usize)>,
    nulls: usize,
}

impl Groups {
    fn of(column: &Column) -> Self {
        match &column.data {
            ColumnData::Numeric(values) => {
                let mut present: Vec<f64> = values.iter().flatten().copied().collect();
                present.sort_by(f64::total_cmp);
                let mut groups: Vec<(f64, usize)> = Vec::new();
                for value in present {
                    match groups.last_mut() {
                        Some((prev, count)) if *prev == value => *count += 1,
                        _ => groups.push((value, 1)),
                    }
                }
                Self {
                    values: groups
                        .into_iter()
                        .map(|(value, count)| (CellValue::Number(value), count))
                        .collect(),
                    nulls: column.null_count(),
                }
            }
            ColumnData::Text(values) => {
                let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
                for value in values.iter().flatten() {
                    *counts.entry(value.as_str()).or_insert(0) += 1;
                }
                Self {
                    values: counts
                        .into_iter()
                        .map(|(value, count)| (CellValue::text(value), count))
                        .collect(),
                    nulls: column.null_count(),
                }
            }
        }
    }

    fn distinct(&self) -> usize {
        self.values.len()
    }
}

/// Number of distinct non-null values in a column.
pub fn distinct_count(column: &Column) -> usize {
    Groups::of(column).distinct()
}

/// Tags a column by kind and cardinality.
///
/// Precedence: above `continuous_threshold` the column is continuous when
/// numeric and categorical otherwise; below `discrete_threshold` it is discrete
/// when numeric and categorical otherwise; anything in between is categorical.
pub fn classify(kind: ColumnKind, distinct: usize, options: &ProfileOptions) -> VariableClass {
    if distinct > options.continuous_threshold {
        if kind.is_numeric() {
            VariableClass::Continuous
        } else {
            VariableClass::Categorical
        }
    } else if distinct < options.discrete_threshold {
        if kind.is_numeric() {
            VariableClass::Discrete
        } else {
            VariableClass::Categorical
        }
    } else {
        VariableClass::Categorical
    }
}

/// Distribution of a single column over `row_count` rows.
pub fn column_distribution(
    column: &Column,
    row_count: usize,
    options: &ProfileOptions,
) -> Distribution {
    let groups = Groups::of(column);
    let distinct_count = groups.distinct();
    let Groups { values, nulls } = groups;

    let share = |count: usize| {
        if row_count == 0 {
            0.0
        } else {
            count as f64 * 100.0 / row_count as f64
        }
    };
    let mut entries: Vec<DistributionEntry> = values
        .into_iter()
        .map(|(value, count)| DistributionEntry {
            value,
            percentage: share(count),
        })
        .collect();
    if nulls > 0 {
        entries.push(DistributionEntry {
            value: CellValue::Blank,
            percentage: share(nulls),
        });
    }

    // Stable: equal percentages keep ascending value order.
    entries.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));

    let truncated = distinct_count > options.continuous_threshold;
    if truncated {
        entries.truncate(options.truncated_distribution_rows);
    }

    Distribution {
        column: column.name.clone(),
        entries,
        distinct_count,
        truncated,
    }
}

/// Distribution of the named column.
pub fn compute_distribution(
    table: &Table,
    column_name: &str,
    options: &ProfileOptions,
) -> Result<Distribution> {
    let column = table
        .column(column_name)
        .ok_or_else(|| StatsError::UnknownColumn {
            column: column_name.to_string(),
        })?;
    Ok(column_distribution(column, table.row_count(), options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_column(values: &[Option<&str>]) -> Column {
        Column::text(
            "t",
            "str",
            values.iter().map(|v| v.map(str::to_string)).collect(),
        )
    }

    #[test]
    fn classification_follows_precedence() {
        let options = ProfileOptions::default();
        assert_eq!(
            classify(ColumnKind::Numeric, 600, &options),
            VariableClass::Continuous
        );
        assert_eq!(
            classify(ColumnKind::Numeric, 50, &options),
            VariableClass::Discrete
        );
        assert_eq!(
            classify(ColumnKind::Text, 50, &options),
            VariableClass::Categorical
        );
        assert_eq!(
            classify(ColumnKind::Numeric, 250, &options),
            VariableClass::Categorical
        );
        assert_eq!(
            classify(ColumnKind::Text, 600, &options),
            VariableClass::Categorical
        );
    }

    #[test]
    fn classification_boundaries_are_categorical() {
        let options = ProfileOptions::default();
        assert_eq!(
            classify(ColumnKind::Numeric, 100, &options),
            VariableClass::Categorical
        );
        assert_eq!(
            classify(ColumnKind::Numeric, 500, &options),
            VariableClass::Categorical
        );
        assert_eq!(
            classify(ColumnKind::Numeric, 99, &options),
            VariableClass::Discrete
        );
        assert_eq!(
            classify(ColumnKind::Numeric, 501, &options),
            VariableClass::Continuous
        );
    }

    #[test]
    fn ties_keep_ascending_value_order() {
        let column = text_column(&[Some("NY"), Some("NY"), Some("LA"), Some("LA")]);
        let dist = column_distribution(&column, 4, &ProfileOptions::default());
        let values: Vec<_> = dist.entries.iter().map(|e| e.value.clone()).collect();
        assert_eq!(values, vec![CellValue::text("LA"), CellValue::text("NY")]);
        assert!(dist.entries.iter().all(|e| e.percentage == 50.0));
        assert!(!dist.truncated);
    }

    #[test]
    fn nulls_form_their_own_group() {
        let column = Column::numeric("n", "f64", vec![Some(1.0), None, Some(1.0), Some(2.0)]);
        let dist = column_distribution(&column, 4, &ProfileOptions::default());
        assert_eq!(dist.distinct_count, 2);
        assert_eq!(dist.entries[0].value, CellValue::Number(1.0));
        assert_eq!(dist.entries[0].percentage, 50.0);
        assert_eq!(dist.entries[1].value, CellValue::Number(2.0));
        assert_eq!(dist.entries[2].value, CellValue::Blank);
        assert!((dist.total_percentage() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn high_cardinality_is_truncated() {
        let column = Column::numeric("n", "i64", (0..600).map(|v| Some(f64::from(v))).collect());
        let dist = column_distribution(&column, 600, &ProfileOptions::default());
        assert!(dist.truncated);
        assert_eq!(dist.distinct_count, 600);
        assert_eq!(dist.entries.len(), 100);
        assert_eq!(dist.entries[0].value, CellValue::Number(0.0));
    }

    #[test]
    fn unknown_column_is_an_error() {
        let table = Table::new(vec![text_column(&[Some("a")])]).unwrap();
        let err = compute_distribution(&table, "missing", &ProfileOptions::default()).unwrap_err();
        assert!(matches!(err, StatsError::UnknownColumn { .. }));
    }
}
