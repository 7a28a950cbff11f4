//! Row-indexed grids of cell values ready for placement.

use dprof_model::{CellValue, SUMMARY_FIELDS, Table};
use dprof_stats::{Matrix, SummaryTable};

#[derive(Debug, Clone, PartialEq)]
pub struct FrameColumn {
    pub name: String,
    pub values: Vec<CellValue>,
}

/// Named columns of cell values sharing one row index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub index: Vec<CellValue>,
    pub columns: Vec<FrameColumn>,
}

impl Frame {
    /// Table rows labelled by their position in the source file.
    pub fn from_table(table: &Table) -> Self {
        let index = table
            .index()
            .iter()
            .map(|&row| CellValue::Number(row as f64))
            .collect();
        let columns = table
            .columns()
            .iter()
            .map(|column| FrameColumn {
                name: column.name.clone(),
                values: column.cells(),
            })
            .collect();
        Self { index, columns }
    }

    /// One row per profiled column, one column per summary field.
    pub fn from_summary(summary: &SummaryTable) -> Self {
        let index = summary
            .iter()
            .map(|column| CellValue::text(column.name.clone()))
            .collect();
        let rows: Vec<Vec<CellValue>> = summary.iter().map(|column| column.field_cells()).collect();
        let columns = SUMMARY_FIELDS
            .iter()
            .enumerate()
            .map(|(field, name)| FrameColumn {
                name: (*name).to_string(),
                values: rows.iter().map(|row| row[field].clone()).collect(),
            })
            .collect();
        Self { index, columns }
    }

    pub fn from_matrix(matrix: &Matrix) -> Self {
        let index = matrix
            .labels
            .iter()
            .map(|label| CellValue::text(label.clone()))
            .collect();
        let columns = matrix
            .labels
            .iter()
            .enumerate()
            .map(|(col, label)| FrameColumn {
                name: label.clone(),
                values: matrix.values.iter().map(|row| CellValue::Number(row[col])).collect(),
            })
            .collect();
        Self { index, columns }
    }

    pub fn row_count(&self) -> usize {
        self.index.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use dprof_model::{Column, ProfileOptions};
    use dprof_stats::{compute_summary, correlation_matrix};

    use super::*;

    fn sample_table() -> Table {
        Table::new(vec![
            Column::numeric("age", "i64", vec![Some(20.0), Some(30.0), Some(40.0), None]),
            Column::text(
                "city",
                "str",
                vec![
                    Some("NY".to_string()),
                    Some("NY".to_string()),
                    Some("LA".to_string()),
                    Some("LA".to_string()),
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn table_frame_keeps_source_row_labels() {
        let frame = Frame::from_table(&sample_table().tail(2));
        assert_eq!(frame.index, vec![CellValue::Number(2.0), CellValue::Number(3.0)]);
        assert_eq!(frame.columns[0].values[1], CellValue::Blank);
        assert_eq!(frame.columns[1].values[0], CellValue::text("LA"));
    }

    #[test]
    fn summary_frame_is_transposed() {
        let summary = compute_summary(&sample_table(), &ProfileOptions::default());
        let frame = Frame::from_summary(&summary);
        assert_eq!(frame.row_count(), 2);
        assert_eq!(frame.column_count(), SUMMARY_FIELDS.len());
        assert_eq!(frame.index[1], CellValue::text("city"));
        assert_eq!(frame.columns[0].name, "dtype");
        assert_eq!(frame.columns[1].values[0], CellValue::Number(3.0));
        assert_eq!(frame.columns[4].values[1], CellValue::Blank);
    }

    #[test]
    fn matrix_frame_labels_rows_and_columns() {
        let frame = Frame::from_matrix(&correlation_matrix(&sample_table()));
        assert_eq!(frame.index, vec![CellValue::text("age")]);
        assert_eq!(frame.columns[0].name, "age");
        assert_eq!(frame.columns[0].values, vec![CellValue::Number(1.0)]);
    }
}
